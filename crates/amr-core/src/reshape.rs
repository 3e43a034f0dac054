//! Wide-to-long reshape.
//!
//! One output row per (isolate, antibiotic) pair with an observed result.
//! Missing susceptibility cells are dropped here, so every downstream
//! denominator counts observed results only:
//! `|long| = |wide| * |antibiotics| - missing_cells`.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use amr_model::{Result, Susceptibility, TableSchema, columns};

use crate::frame_utils::{f64_values, frame_error, string_values};

/// Reshape the (filtered) encoded wide frame into long format.
///
/// Rows are ordered isolate-major, antibiotics in input column order, and
/// carry the full metadata plus `ANTIBIOTIC`, `RESISTANCE_SCORE`, and the
/// derived `RESISTANCE_LABEL`.
pub fn build_long_frame(encoded: &DataFrame, schema: &TableSchema) -> Result<DataFrame> {
    let sno = string_values(encoded, columns::SNO)?;
    let sample_type = string_values(encoded, columns::SAMPLE_TYPE)?;
    let gender = string_values(encoded, columns::GENDER)?;
    let esbl = string_values(encoded, columns::ESBL)?;
    let mdr = string_values(encoded, columns::MDR)?;
    let mar_index = f64_values(encoded, columns::MAR_INDEX)?;

    let mut out_sno: Vec<String> = Vec::new();
    let mut out_sample_type: Vec<String> = Vec::new();
    let mut out_gender: Vec<String> = Vec::new();
    let mut out_esbl: Vec<String> = Vec::new();
    let mut out_mdr: Vec<String> = Vec::new();
    let mut out_mar: Vec<Option<f64>> = Vec::new();
    let mut out_antibiotic: Vec<String> = Vec::new();
    let mut out_score: Vec<f64> = Vec::new();
    let mut out_label: Vec<String> = Vec::new();

    let mut antibiotic_columns = Vec::with_capacity(schema.antibiotic_count());
    for antibiotic in schema.antibiotics() {
        antibiotic_columns.push((antibiotic, encoded.column(antibiotic).map_err(frame_error)?));
    }

    for idx in 0..encoded.height() {
        for (antibiotic, column) in &antibiotic_columns {
            let antibiotic = *antibiotic;
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            let score = match value {
                AnyValue::Float64(score) => score,
                AnyValue::Null => continue,
                other => {
                    return Err(amr_model::AmrError::Frame(format!(
                        "unexpected encoded value in {antibiotic}: {other}"
                    )));
                }
            };
            let label = Susceptibility::from_score(score)
                .map(|category| category.label().to_string())
                .ok_or_else(|| {
                    amr_model::AmrError::Frame(format!(
                        "unexpected resistance score in {antibiotic}: {score}"
                    ))
                })?;
            out_sno.push(sno[idx].clone());
            out_sample_type.push(sample_type[idx].clone());
            out_gender.push(gender[idx].clone());
            out_esbl.push(esbl[idx].clone());
            out_mdr.push(mdr[idx].clone());
            out_mar.push(mar_index[idx]);
            out_antibiotic.push(antibiotic.clone());
            out_score.push(score);
            out_label.push(label);
        }
    }

    let frame_columns: Vec<Column> = vec![
        Series::new(columns::SNO.into(), out_sno).into_column(),
        Series::new(columns::SAMPLE_TYPE.into(), out_sample_type).into_column(),
        Series::new(columns::GENDER.into(), out_gender).into_column(),
        Series::new(columns::ESBL.into(), out_esbl).into_column(),
        Series::new(columns::MDR.into(), out_mdr).into_column(),
        Series::new(columns::MAR_INDEX.into(), out_mar).into_column(),
        Series::new(columns::ANTIBIOTIC.into(), out_antibiotic).into_column(),
        Series::new(columns::RESISTANCE_SCORE.into(), out_score).into_column(),
        Series::new(columns::RESISTANCE_LABEL.into(), out_label).into_column(),
    ];
    DataFrame::new(frame_columns).map_err(frame_error)
}
