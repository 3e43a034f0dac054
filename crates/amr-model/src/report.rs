//! Derived aggregate tables and scalars.
//!
//! All types here are pure data carriers, recomputed from the filtered
//! dataset on every run and serialized as-is into the JSON report payload.

use serde::{Deserialize, Serialize};

/// One (antibiotic, label) cell of the resistance distribution.
///
/// `percent` is normalized within the antibiotic across its observed
/// results, so the three labels of one antibiotic sum to 100 when no value
/// is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceBreakdownRow {
    pub antibiotic: String,
    pub label: String,
    pub count: u64,
    pub percent: f64,
}

/// MDR / ESBL prevalence over the filtered isolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prevalence {
    pub total_isolates: usize,
    pub mdr_count: u64,
    pub mdr_percent: f64,
    pub esbl_count: u64,
    pub esbl_percent: f64,
}

/// MAR-index risk summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarRisk {
    pub high_risk_count: u64,
    pub high_risk_percent: f64,
    /// Median over isolates with a MAR value; `None` for an empty subset.
    pub median_mar_index: Option<f64>,
}

/// Pairwise Pearson correlation of binarized resistance (score == 1.0).
///
/// Symmetric, diagonal 1.0. `None` marks an undefined cell: at least one of
/// the pair has zero variance in the filtered data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoResistanceMatrix {
    pub antibiotics: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CoResistanceMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.antibiotics.is_empty()
    }
}

/// One resistance profile among MDR isolates with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdrProfile {
    /// Comma-joined antibiotic names (input column order) the isolate is
    /// fully resistant to.
    pub profile: String,
    pub count: u64,
}

/// Resistant share of one antibiotic within one ESBL stratum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsblStratifiedRow {
    pub antibiotic: String,
    pub esbl_positive: bool,
    pub observed: u64,
    pub resistant_percent: f64,
}

/// Resistant share of one antibiotic among MDR isolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdrDriverRow {
    pub antibiotic: String,
    pub observed: u64,
    pub resistant_percent: f64,
}

/// An antibiotic ranked by raw resistant-isolate count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopResistant {
    pub antibiotic: String,
    pub resistant_isolates: u64,
}

/// Headline numbers for the narrative summary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSummary {
    pub total_isolates: usize,
    pub mdr_percent: f64,
    pub esbl_percent: f64,
    pub median_mar_index: Option<f64>,
    pub high_risk_percent: f64,
    /// Top three antibiotics by resistant-isolate count, ties broken by
    /// input column order.
    pub top_resistant: Vec<TopResistant>,
}

/// Every aggregate computed from one filtered dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceReport {
    pub resistance_summary: Vec<ResistanceBreakdownRow>,
    pub prevalence: Prevalence,
    pub mar_risk: MarRisk,
    pub co_resistance: CoResistanceMatrix,
    pub mdr_profiles: Vec<MdrProfile>,
    pub esbl_stratified: Vec<EsblStratifiedRow>,
    pub mdr_drivers: Vec<MdrDriverRow>,
    pub narrative: NarrativeSummary,
}
