//! The full export set for one pipeline run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use amr_core::PipelineResult;

use crate::narrative::write_narrative;
use crate::payload::write_report_json;
use crate::tables::{write_frame_csv, write_mdr_profiles_csv, write_resistance_summary_csv};

/// File names written into the output directory.
pub const WIDE_CSV: &str = "amr_cleaned_wide.csv";
pub const LONG_CSV: &str = "amr_long_format.csv";
pub const RESISTANCE_SUMMARY_CSV: &str = "resistance_summary.csv";
pub const MDR_PROFILES_CSV: &str = "mdr_profiles.csv";
pub const HIGH_RISK_CSV: &str = "high_risk_isolates.csv";
pub const NARRATIVE_TXT: &str = "narrative_summary.txt";

/// Paths of every artifact one export pass produced.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub wide: PathBuf,
    pub long: PathBuf,
    pub resistance_summary: PathBuf,
    pub mdr_profiles: PathBuf,
    pub high_risk: PathBuf,
    pub narrative: PathBuf,
    pub json_report: PathBuf,
}

/// Write every export artifact into `output_dir`.
///
/// Everything is derived from the same `PipelineResult`, so the whole set
/// reflects one filter selection.
pub fn write_all(output_dir: &Path, dataset: &str, result: &PipelineResult) -> Result<ExportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let wide = output_dir.join(WIDE_CSV);
    write_frame_csv(&result.wide, &wide)?;
    let long = output_dir.join(LONG_CSV);
    write_frame_csv(&result.long, &long)?;
    let resistance_summary = output_dir.join(RESISTANCE_SUMMARY_CSV);
    write_resistance_summary_csv(&result.report.resistance_summary, &resistance_summary)?;
    let mdr_profiles = output_dir.join(MDR_PROFILES_CSV);
    write_mdr_profiles_csv(&result.report.mdr_profiles, &mdr_profiles)?;
    let high_risk = output_dir.join(HIGH_RISK_CSV);
    write_frame_csv(&result.high_risk, &high_risk)?;
    let narrative = output_dir.join(NARRATIVE_TXT);
    write_narrative(&result.report.narrative, &narrative)?;
    let json_report = write_report_json(output_dir, dataset, result)?;

    info!(
        output_dir = %output_dir.display(),
        isolates = result.isolate_count(),
        "exports written"
    );
    Ok(ExportPaths {
        wide,
        long,
        resistance_summary,
        mdr_profiles,
        high_risk,
        narrative,
        json_report,
    })
}
