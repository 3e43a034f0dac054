//! Raw delimited-table loading.
//!
//! The input contract is deliberately simple: one sheet, first row is the
//! header, every other row is one isolate. Cells are kept as trimmed strings;
//! all typing happens downstream after validation.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A raw tabular file: header row plus string cells.
///
/// Rows are padded (or truncated) to the header width, so `rows[i][j]` is
/// always addressable for any header index `j`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell value at (row, column index); empty string when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a delimited file into a [`CsvTable`].
///
/// Fully blank lines are skipped. A file with no usable rows at all is an
/// [`IngestError::EmptyInput`]; a header-only file is a valid zero-isolate
/// table.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.display().to_string(),
            source,
        })?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyInput(path.display().to_string()));
    }
    let headers = raw_rows.remove(0);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in &raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv table"
    );
    Ok(CsvTable { headers, rows })
}
