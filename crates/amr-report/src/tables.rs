//! Delimited-table writers.
//!
//! Every writer reflects the frames it is handed, which in turn reflect the
//! filter selection active when the pipeline ran. Missing cells are written
//! as empty fields.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use amr_ingest::any_to_string;
use amr_model::{MdrProfile, ResistanceBreakdownRow};

/// Write a frame as CSV: header row, then one record per row.
pub fn write_frame_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    let columns = df.get_columns();
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write the per-antibiotic resistance distribution.
pub fn write_resistance_summary_csv(rows: &[ResistanceBreakdownRow], path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["ANTIBIOTIC", "RESISTANCE_LABEL", "COUNT", "PERCENT"])?;
    for row in rows {
        writer.write_record(&[
            row.antibiotic.clone(),
            row.label.clone(),
            row.count.to_string(),
            format!("{:.2}", row.percent),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write the dominant MDR profile table.
pub fn write_mdr_profiles_csv(profiles: &[MdrProfile], path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["PROFILE", "COUNT"])?;
    for profile in profiles {
        writer.write_record(&[profile.profile.clone(), profile.count.to_string()])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
