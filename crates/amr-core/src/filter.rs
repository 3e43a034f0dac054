//! Categorical row subsetting.
//!
//! The selection is applied to the validated rows before any frame is
//! built, so the wide, encoded, and long views are anchored to a single
//! isolate set by construction and cannot drift apart.

use tracing::debug;

use amr_ingest::CsvTable;
use amr_model::{FilterSelection, columns};

/// Restrict the table to isolates whose gender and sample type both pass
/// the selection. An empty selection set yields an empty table.
pub fn apply(table: &CsvTable, selection: &FilterSelection) -> CsvTable {
    if selection.is_unrestricted() {
        return table.clone();
    }
    let gender_col = table
        .column_index(columns::GENDER)
        .expect("validated metadata column");
    let sample_col = table
        .column_index(columns::SAMPLE_TYPE)
        .expect("validated metadata column");
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(idx, _)| {
            selection.matches(table.cell(*idx, gender_col), table.cell(*idx, sample_col))
        })
        .map(|(_, row)| row.clone())
        .collect();
    debug!(
        before = table.rows.len(),
        after = rows.len(),
        "applied filter selection"
    );
    CsvTable::new(table.headers.clone(), rows)
}
