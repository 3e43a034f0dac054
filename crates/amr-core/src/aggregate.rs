//! Derived surveillance aggregates.
//!
//! Every function here is a pure view over the filtered frames; nothing is
//! cached between runs. Denominators count observed results only, matching
//! the reshape's missing-value policy.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use amr_model::{
    CoResistanceMatrix, EsblStratifiedRow, MAR_HIGH_RISK_THRESHOLD, MarRisk, MdrDriverRow,
    MdrProfile, NarrativeSummary, Prevalence, ResistanceBreakdownRow, Result, SurveillanceReport,
    Susceptibility, TableSchema, TopResistant, columns, flags,
};

use crate::frame_utils::{f64_values, string_values};

/// Number of dominant MDR profiles reported.
const TOP_PROFILES: usize = 10;

/// Number of antibiotics in the narrative ranking.
const TOP_RESISTANT: usize = 3;

/// Compute every aggregate from the filtered wide/encoded/long frames.
pub fn build_report(
    wide: &DataFrame,
    encoded: &DataFrame,
    long: &DataFrame,
    schema: &TableSchema,
) -> Result<SurveillanceReport> {
    let mdr_flags = string_values(wide, columns::MDR)?;
    let esbl_flags = string_values(wide, columns::ESBL)?;
    let mar_index = f64_values(wide, columns::MAR_INDEX)?;
    let scores = antibiotic_scores(encoded, schema)?;

    let prevalence = prevalence(&mdr_flags, &esbl_flags);
    let mar_risk = mar_risk(&mar_index);
    let report = SurveillanceReport {
        resistance_summary: resistance_summary(long, schema)?,
        co_resistance: co_resistance(&scores, schema),
        mdr_profiles: mdr_profiles(&scores, &mdr_flags, schema),
        esbl_stratified: esbl_stratified(&scores, &esbl_flags, schema),
        mdr_drivers: mdr_drivers(&scores, &mdr_flags, schema),
        narrative: narrative(&prevalence, &mar_risk, &scores, schema),
        prevalence,
        mar_risk,
    };
    debug!(
        isolates = wide.height(),
        antibiotics = schema.antibiotic_count(),
        "aggregates computed"
    );
    Ok(report)
}

/// Per-antibiotic score vectors in schema order.
fn antibiotic_scores(encoded: &DataFrame, schema: &TableSchema) -> Result<Vec<Vec<Option<f64>>>> {
    schema
        .antibiotics()
        .iter()
        .map(|antibiotic| f64_values(encoded, antibiotic))
        .collect()
}

fn percentage(count: u64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Resistance distribution: per-antibiotic label counts normalized to
/// percentages of that antibiotic's observed results.
fn resistance_summary(long: &DataFrame, schema: &TableSchema) -> Result<Vec<ResistanceBreakdownRow>> {
    let antibiotics = string_values(long, columns::ANTIBIOTIC)?;
    let labels = string_values(long, columns::RESISTANCE_LABEL)?;

    let mut counts: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    for (antibiotic, label) in antibiotics.iter().zip(&labels) {
        *counts
            .entry(antibiotic.as_str())
            .or_default()
            .entry(label.as_str())
            .or_default() += 1;
    }

    let mut rows = Vec::new();
    for antibiotic in schema.antibiotics() {
        let Some(by_label) = counts.get(antibiotic.as_str()) else {
            continue;
        };
        let observed: u64 = by_label.values().sum();
        for category in Susceptibility::ALL {
            let Some(count) = by_label.get(category.label()).copied() else {
                continue;
            };
            rows.push(ResistanceBreakdownRow {
                antibiotic: antibiotic.clone(),
                label: category.label().to_string(),
                count,
                percent: percentage(count, observed as usize),
            });
        }
    }
    Ok(rows)
}

fn prevalence(mdr_flags: &[String], esbl_flags: &[String]) -> Prevalence {
    let total = mdr_flags.len();
    let mdr_count = mdr_flags.iter().filter(|flag| flags::is_positive(flag)).count() as u64;
    let esbl_count = esbl_flags
        .iter()
        .filter(|flag| flags::is_positive(flag))
        .count() as u64;
    Prevalence {
        total_isolates: total,
        mdr_count,
        mdr_percent: percentage(mdr_count, total),
        esbl_count,
        esbl_percent: percentage(esbl_count, total),
    }
}

fn mar_risk(mar_index: &[Option<f64>]) -> MarRisk {
    let high_risk_count = mar_index
        .iter()
        .filter(|value| matches!(value, Some(v) if *v > MAR_HIGH_RISK_THRESHOLD))
        .count() as u64;
    MarRisk {
        high_risk_count,
        high_risk_percent: percentage(high_risk_count, mar_index.len()),
        median_mar_index: median(mar_index),
    }
}

fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut observed: Vec<f64> = values.iter().copied().flatten().collect();
    if observed.is_empty() {
        return None;
    }
    observed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = observed.len() / 2;
    if observed.len() % 2 == 1 {
        Some(observed[mid])
    } else {
        Some((observed[mid - 1] + observed[mid]) / 2.0)
    }
}

/// Pairwise Pearson correlation of binarized resistance.
///
/// A missing score binarizes to 0 (not resistant). Cells where either
/// antibiotic has zero variance are undefined and emitted as `None`; the
/// diagonal is exactly 1.0 whenever the column varies.
fn co_resistance(scores: &[Vec<Option<f64>>], schema: &TableSchema) -> CoResistanceMatrix {
    let binarized: Vec<Vec<f64>> = scores
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|score| if *score == Some(1.0) { 1.0 } else { 0.0 })
                .collect()
        })
        .collect();
    let count = binarized.len();
    let mut values = vec![vec![None; count]; count];
    for row in 0..count {
        for col in row..count {
            let cell = if row == col {
                has_variance(&binarized[row]).then_some(1.0)
            } else {
                pearson(&binarized[row], &binarized[col])
            };
            values[row][col] = cell;
            values[col][row] = cell;
        }
    }
    CoResistanceMatrix {
        antibiotics: schema.antibiotics().to_vec(),
        values,
    }
}

fn has_variance(values: &[f64]) -> bool {
    values
        .first()
        .is_some_and(|first| values.iter().any(|value| value != first))
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n == 0 {
        return None;
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;
    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }
    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }
    Some(covariance / (variance_x * variance_y).sqrt())
}

/// Dominant resistance profiles among MDR isolates.
///
/// A profile is the comma-joined list (input column order) of antibiotics
/// the isolate scores 1.0 against. Top 10 by count; ties keep first
/// appearance order.
fn mdr_profiles(
    scores: &[Vec<Option<f64>>],
    mdr_flags: &[String],
    schema: &TableSchema,
) -> Vec<MdrProfile> {
    let mut order: BTreeMap<String, (usize, u64)> = BTreeMap::new();
    let mut next_rank = 0usize;
    for (isolate, flag) in mdr_flags.iter().enumerate() {
        if !flags::is_positive(flag) {
            continue;
        }
        let profile = schema
            .antibiotics()
            .iter()
            .enumerate()
            .filter(|(column, _)| scores[*column][isolate] == Some(1.0))
            .map(|(_, antibiotic)| antibiotic.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let entry = order.entry(profile).or_insert_with(|| {
            let rank = next_rank;
            next_rank += 1;
            (rank, 0)
        });
        entry.1 += 1;
    }
    let mut profiles: Vec<(usize, MdrProfile)> = order
        .into_iter()
        .map(|(profile, (rank, count))| (rank, MdrProfile { profile, count }))
        .collect();
    profiles.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));
    profiles
        .into_iter()
        .take(TOP_PROFILES)
        .map(|(_, profile)| profile)
        .collect()
}

/// Resistant share per antibiotic within each ESBL stratum.
fn esbl_stratified(
    scores: &[Vec<Option<f64>>],
    esbl_flags: &[String],
    schema: &TableSchema,
) -> Vec<EsblStratifiedRow> {
    let mut rows = Vec::new();
    for (column, antibiotic) in schema.antibiotics().iter().enumerate() {
        for stratum in [true, false] {
            let mut observed = 0u64;
            let mut resistant = 0u64;
            for (isolate, flag) in esbl_flags.iter().enumerate() {
                if flags::is_positive(flag) != stratum {
                    continue;
                }
                let Some(score) = scores[column][isolate] else {
                    continue;
                };
                observed += 1;
                if score == 1.0 {
                    resistant += 1;
                }
            }
            if observed == 0 {
                continue;
            }
            rows.push(EsblStratifiedRow {
                antibiotic: antibiotic.clone(),
                esbl_positive: stratum,
                observed,
                resistant_percent: percentage(resistant, observed as usize),
            });
        }
    }
    rows
}

/// Antibiotics ranked by resistant share among MDR isolates.
fn mdr_drivers(
    scores: &[Vec<Option<f64>>],
    mdr_flags: &[String],
    schema: &TableSchema,
) -> Vec<MdrDriverRow> {
    let mut rows = Vec::new();
    for (column, antibiotic) in schema.antibiotics().iter().enumerate() {
        let mut observed = 0u64;
        let mut resistant = 0u64;
        for (isolate, flag) in mdr_flags.iter().enumerate() {
            if !flags::is_positive(flag) {
                continue;
            }
            let Some(score) = scores[column][isolate] else {
                continue;
            };
            observed += 1;
            if score == 1.0 {
                resistant += 1;
            }
        }
        if observed == 0 {
            continue;
        }
        rows.push(MdrDriverRow {
            antibiotic: antibiotic.clone(),
            observed,
            resistant_percent: percentage(resistant, observed as usize),
        });
    }
    // Stable: ties keep input column order.
    rows.sort_by(|a, b| {
        b.resistant_percent
            .partial_cmp(&a.resistant_percent)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn narrative(
    prevalence: &Prevalence,
    mar_risk: &MarRisk,
    scores: &[Vec<Option<f64>>],
    schema: &TableSchema,
) -> NarrativeSummary {
    let mut ranked: Vec<TopResistant> = schema
        .antibiotics()
        .iter()
        .enumerate()
        .map(|(column, antibiotic)| TopResistant {
            antibiotic: antibiotic.clone(),
            resistant_isolates: scores[column]
                .iter()
                .filter(|score| **score == Some(1.0))
                .count() as u64,
        })
        .collect();
    // Stable: ties keep input column order.
    ranked.sort_by(|a, b| b.resistant_isolates.cmp(&a.resistant_isolates));
    ranked.truncate(TOP_RESISTANT);
    NarrativeSummary {
        total_isolates: prevalence.total_isolates,
        mdr_percent: prevalence.mdr_percent,
        esbl_percent: prevalence.esbl_percent,
        median_mar_index: mar_risk.median_mar_index,
        high_risk_percent: mar_risk.high_risk_percent,
        top_resistant: ranked,
    }
}
