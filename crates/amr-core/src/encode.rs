//! Frame construction and the fixed S/I/R encoding.
//!
//! Two typed frames are materialized from the validated rows:
//!
//! - the **wide** frame keeps susceptibility values as canonical uppercase
//!   codes and normalizes the ESBL/MDR/GENDER metadata to uppercase;
//! - the **encoded** frame maps every antibiotic cell through
//!   S -> 0.0, I -> 0.5, R -> 1.0.
//!
//! Missing cells stay missing (null), never coerced to a score.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use amr_ingest::{CsvTable, parse_f64};
use amr_model::{Result, Susceptibility, TableSchema, columns};

use crate::frame_utils::frame_error;

/// Metadata columns whose values are uppercased in both frames.
const UPPERCASED_METADATA: [&str; 3] = [columns::GENDER, columns::ESBL, columns::MDR];

/// Build the cleaned wide frame: canonical metadata, uppercase S/I/R codes.
pub fn build_wide_frame(table: &CsvTable, schema: &TableSchema) -> Result<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::new();
    for name in amr_model::REQUIRED_COLUMNS {
        frame_columns.push(metadata_column(table, name));
    }
    for antibiotic in schema.antibiotics() {
        let col = table
            .column_index(antibiotic)
            .expect("validated antibiotic column");
        let mut values: Vec<Option<String>> = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            let cell = table.cell(row, col);
            values.push(
                Susceptibility::from_code(cell).map(|category| category.code().to_string()),
            );
        }
        frame_columns.push(Series::new(antibiotic.as_str().into(), values).into_column());
    }
    DataFrame::new(frame_columns).map_err(frame_error)
}

/// Build the encoded frame: identical shape, antibiotic cells as scores.
pub fn build_encoded_frame(table: &CsvTable, schema: &TableSchema) -> Result<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::new();
    for name in amr_model::REQUIRED_COLUMNS {
        frame_columns.push(metadata_column(table, name));
    }
    for antibiotic in schema.antibiotics() {
        let col = table
            .column_index(antibiotic)
            .expect("validated antibiotic column");
        let mut values: Vec<Option<f64>> = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            let cell = table.cell(row, col);
            values.push(Susceptibility::from_code(cell).map(|category| category.score()));
        }
        frame_columns.push(Series::new(antibiotic.as_str().into(), values).into_column());
    }
    DataFrame::new(frame_columns).map_err(frame_error)
}

fn metadata_column(table: &CsvTable, name: &str) -> Column {
    let col = table.column_index(name).expect("validated metadata column");
    if name == columns::MAR_INDEX {
        let mut values: Vec<Option<f64>> = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            values.push(parse_f64(table.cell(row, col)));
        }
        return Series::new(name.into(), values).into_column();
    }
    let uppercase = UPPERCASED_METADATA.contains(&name);
    let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
    for row in 0..table.rows.len() {
        let cell = table.cell(row, col);
        values.push(if uppercase {
            cell.to_uppercase()
        } else {
            cell.to_string()
        });
    }
    Series::new(name.into(), values).into_column()
}
