//! Small DataFrame access helpers shared across pipeline stages.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use amr_ingest::{any_to_f64, any_to_string};
use amr_model::{AmrError, Result};

pub(crate) fn frame_error(error: polars::prelude::PolarsError) -> AmrError {
    AmrError::Frame(error.to_string())
}

/// Read a column as strings; nulls become empty strings.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name).map_err(frame_error)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Read a column as optional floats; nulls and non-numeric cells are `None`.
pub fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name).map_err(frame_error)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Keep the rows where `mask` is true, preserving column types and order.
pub fn mask_rows(df: &DataFrame, mask: &[bool]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = column.name().clone();
        match column.dtype() {
            DataType::Float64 => {
                let mut values: Vec<Option<f64>> = Vec::new();
                for idx in 0..df.height() {
                    if mask.get(idx).copied().unwrap_or(false) {
                        values.push(any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
                    }
                }
                columns.push(Series::new(name, values).into_column());
            }
            _ => {
                let mut values: Vec<Option<String>> = Vec::new();
                for idx in 0..df.height() {
                    if mask.get(idx).copied().unwrap_or(false) {
                        let value = column.get(idx).unwrap_or(AnyValue::Null);
                        values.push(match value {
                            AnyValue::Null => None,
                            other => Some(any_to_string(other)),
                        });
                    }
                }
                columns.push(Series::new(name, values).into_column());
            }
        }
    }
    DataFrame::new(columns).map_err(frame_error)
}
