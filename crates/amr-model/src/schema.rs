//! Table schema: the fixed metadata column set plus the per-load antibiotic
//! column set.
//!
//! The antibiotic set is dynamic: every header that is not a required
//! metadata column is an antibiotic. The validator determines it once and the
//! rest of the pipeline threads the resulting [`TableSchema`] through instead
//! of re-deriving it per stage.

use serde::{Deserialize, Serialize};

/// Canonical column names after header normalization.
pub mod columns {
    pub const SNO: &str = "SNO";
    pub const SAMPLE_TYPE: &str = "SAMPLE_TYPE";
    pub const GENDER: &str = "GENDER";
    pub const ESBL: &str = "ESBL";
    pub const MDR: &str = "MDR";
    pub const MAR_INDEX: &str = "MAR_INDEX";

    /// Long-format-only columns.
    pub const ANTIBIOTIC: &str = "ANTIBIOTIC";
    pub const RESISTANCE_SCORE: &str = "RESISTANCE_SCORE";
    pub const RESISTANCE_LABEL: &str = "RESISTANCE_LABEL";
}

/// Required metadata columns, in canonical output order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    columns::SNO,
    columns::SAMPLE_TYPE,
    columns::GENDER,
    columns::ESBL,
    columns::MDR,
    columns::MAR_INDEX,
];

/// MAR index above this value marks an isolate as high risk.
pub const MAR_HIGH_RISK_THRESHOLD: f64 = 0.2;

/// The validated column layout of one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Antibiotic column names in input header order.
    antibiotics: Vec<String>,
}

impl TableSchema {
    pub fn new(antibiotics: Vec<String>) -> Self {
        Self { antibiotics }
    }

    /// Antibiotic columns in input header order.
    pub fn antibiotics(&self) -> &[String] {
        &self.antibiotics
    }

    pub fn antibiotic_count(&self) -> usize {
        self.antibiotics.len()
    }

    pub fn is_antibiotic(&self, name: &str) -> bool {
        self.antibiotics.iter().any(|column| column == name)
    }

    pub fn is_required(name: &str) -> bool {
        REQUIRED_COLUMNS.contains(&name)
    }

    /// Wide-table column order: metadata first, antibiotics after, both in
    /// canonical order.
    pub fn wide_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .map(|name| (*name).to_string())
            .chain(self.antibiotics.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_lookup() {
        assert!(TableSchema::is_required("SNO"));
        assert!(TableSchema::is_required("MAR_INDEX"));
        assert!(!TableSchema::is_required("AMX"));
    }

    #[test]
    fn wide_column_order() {
        let schema = TableSchema::new(vec!["AMX".to_string(), "CIP".to_string()]);
        assert_eq!(
            schema.wide_columns(),
            vec!["SNO", "SAMPLE_TYPE", "GENDER", "ESBL", "MDR", "MAR_INDEX", "AMX", "CIP"]
        );
        assert!(schema.is_antibiotic("CIP"));
        assert!(!schema.is_antibiotic("GENDER"));
    }
}
