use std::collections::BTreeSet;

use thiserror::Error;

/// An antibiotic column together with the full set of out-of-domain values
/// observed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnViolation {
    pub column: String,
    pub values: BTreeSet<String>,
}

impl ColumnViolation {
    pub fn new(column: impl Into<String>, values: BTreeSet<String>) -> Self {
        Self {
            column: column.into(),
            values,
        }
    }
}

/// Errors produced by the surveillance pipeline.
///
/// Validation errors carry every offending column/value, not just the first,
/// so a single failed run is enough to fix the input file.
#[derive(Debug, Error)]
pub enum AmrError {
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("invalid susceptibility values: {}", format_violations(.violations))]
    InvalidCategoricalValues { violations: Vec<ColumnViolation> },

    #[error("duplicate isolate identifiers in SNO: {}", .values.join(", "))]
    DuplicateIdentifiers { values: Vec<String> },

    #[error("non-numeric values in {column}: {}", format_value_set(.values))]
    InvalidNumericValues {
        column: String,
        values: BTreeSet<String>,
    },

    #[error("input table is empty")]
    EmptyInput,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Frame(String),
}

pub type Result<T> = std::result::Result<T, AmrError>;

fn format_violations(violations: &[ColumnViolation]) -> String {
    violations
        .iter()
        .map(|violation| {
            format!(
                "{} {{{}}}",
                violation.column,
                format_value_set(&violation.values)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_value_set(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_names_every_column() {
        let error = AmrError::MissingColumns {
            columns: vec!["SNO".to_string(), "MAR_INDEX".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "missing required columns: SNO, MAR_INDEX"
        );
    }

    #[test]
    fn categorical_violations_list_columns_and_values() {
        let error = AmrError::InvalidCategoricalValues {
            violations: vec![
                ColumnViolation::new("AMX", BTreeSet::from(["X".to_string()])),
                ColumnViolation::new(
                    "CIP",
                    BTreeSet::from(["?".to_string(), "RR".to_string()]),
                ),
            ],
        };
        assert_eq!(
            error.to_string(),
            "invalid susceptibility values: AMX {X}; CIP {?, RR}"
        );
    }
}
