//! Bundled sample dataset.
//!
//! A small deterministic table usable as an input template. It exercises the
//! whole surface: mixed S/I/R values, ESBL/MDR positives and negatives, MAR
//! values on both sides of the risk threshold, and one missing cell.

use std::path::Path;

use anyhow::{Context, Result};

const HEADERS: [&str; 12] = [
    "SNO",
    "SAMPLE_TYPE",
    "GENDER",
    "ESBL",
    "MDR",
    "MAR_INDEX",
    "AMPICILLIN",
    "CEFTRIAXONE",
    "CIPROFLOXACIN",
    "GENTAMICIN",
    "MEROPENEM",
    "NITROFURANTOIN",
];

const ROWS: [[&str; 12]; 12] = [
    ["1", "Urine", "F", "YES", "YES", "0.67", "R", "R", "R", "S", "S", "I"],
    ["2", "Urine", "F", "YES", "YES", "0.50", "R", "R", "R", "S", "S", "S"],
    ["3", "Blood", "M", "NO", "NO", "0.17", "S", "S", "S", "S", "S", "S"],
    ["4", "Urine", "M", "NO", "YES", "0.33", "R", "I", "R", "R", "S", "S"],
    ["5", "Pus", "F", "NO", "NO", "0.17", "I", "S", "S", "S", "S", "R"],
    ["6", "Urine", "F", "YES", "YES", "0.67", "R", "R", "R", "S", "I", "S"],
    ["7", "Blood", "M", "NO", "NO", "0.00", "S", "S", "S", "S", "S", "S"],
    ["8", "Sputum", "M", "YES", "YES", "0.83", "R", "R", "R", "R", "R", "I"],
    ["9", "Urine", "F", "NO", "NO", "0.17", "S", "I", "S", "S", "S", "S"],
    ["10", "Pus", "M", "NO", "YES", "0.33", "R", "S", "I", "R", "S", "S"],
    ["11", "Urine", "F", "NO", "NO", "0.17", "S", "S", "R", "S", "S", ""],
    ["12", "Sputum", "F", "YES", "YES", "0.50", "R", "R", "S", "S", "S", "R"],
];

/// Write the sample dataset to `path`.
pub fn write_sample_dataset(path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(HEADERS)?;
    for row in ROWS {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
