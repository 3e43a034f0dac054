//! Versioned JSON report payload.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use amr_core::PipelineResult;
use amr_model::SurveillanceReport;

const REPORT_SCHEMA: &str = "amr-surveillance.report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct SurveillancePayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub dataset: &'a str,
    pub isolates: usize,
    pub antibiotics: &'a [String],
    pub report: &'a SurveillanceReport,
}

/// Write `surveillance_report.json` into `output_dir`.
pub fn write_report_json(
    output_dir: &Path,
    dataset: &str,
    result: &PipelineResult,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let output_path = output_dir.join("surveillance_report.json");
    let payload = SurveillancePayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset,
        isolates: result.isolate_count(),
        antibiotics: result.schema.antibiotics(),
        report: &result.report,
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize report payload")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
