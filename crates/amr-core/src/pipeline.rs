//! The one-shot processing pipeline.
//!
//! `process` is a pure function of (raw table, filter selection): every run
//! normalizes, validates, filters, encodes, reshapes, and aggregates from
//! scratch. No state survives between invocations.

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use amr_ingest::CsvTable;
use amr_model::{
    FilterSelection, MAR_HIGH_RISK_THRESHOLD, Result, SurveillanceReport, TableSchema, columns,
};

use crate::aggregate;
use crate::encode::{build_encoded_frame, build_wide_frame};
use crate::filter;
use crate::frame_utils::{f64_values, mask_rows};
use crate::normalize::normalize_headers;
use crate::reshape::build_long_frame;
use crate::validate::validate;

/// Everything one run produces: the three views, the high-risk subset, and
/// the aggregates, all reflecting the same filter selection.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub schema: TableSchema,
    /// Cleaned wide table: canonical metadata, uppercase S/I/R codes.
    pub wide: DataFrame,
    /// Wide table with antibiotic columns encoded as resistance scores.
    pub encoded: DataFrame,
    /// Long-format table, one row per observed (isolate, antibiotic) result.
    pub long: DataFrame,
    /// Wide-table subset of isolates with MAR index above the risk threshold.
    pub high_risk: DataFrame,
    pub report: SurveillanceReport,
}

impl PipelineResult {
    pub fn isolate_count(&self) -> usize {
        self.wide.height()
    }
}

/// Run the full pipeline over one raw table.
///
/// Validation failures abort before any frame or aggregate is built.
pub fn process(table: &CsvTable, selection: &FilterSelection) -> Result<PipelineResult> {
    let span = info_span!("pipeline", input_rows = table.rows.len());
    let _guard = span.enter();

    let normalized = normalize_headers(table);
    let schema = validate(&normalized)?;
    let filtered = filter::apply(&normalized, selection);

    let wide = build_wide_frame(&filtered, &schema)?;
    let encoded = build_encoded_frame(&filtered, &schema)?;
    let long = build_long_frame(&encoded, &schema)?;
    let report = aggregate::build_report(&wide, &encoded, &long, &schema)?;

    let mar_index = f64_values(&wide, columns::MAR_INDEX)?;
    let high_risk_mask: Vec<bool> = mar_index
        .iter()
        .map(|value| matches!(value, Some(v) if *v > MAR_HIGH_RISK_THRESHOLD))
        .collect();
    let high_risk = mask_rows(&wide, &high_risk_mask)?;

    info!(
        isolates = wide.height(),
        long_rows = long.height(),
        antibiotics = schema.antibiotic_count(),
        high_risk = high_risk.height(),
        "pipeline complete"
    );
    Ok(PipelineResult {
        schema,
        wide,
        encoded,
        long,
        high_risk,
        report,
    })
}
