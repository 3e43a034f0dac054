//! Strict input validation.
//!
//! Runs before any encoding or aggregation. Failures are total: no partial
//! result leaves this module, and each error class reports every offending
//! column/value it found, not just the first.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use amr_ingest::{CsvTable, parse_f64};
use amr_model::{AmrError, ColumnViolation, REQUIRED_COLUMNS, Result, Susceptibility, TableSchema, columns};

/// Validate a header-normalized table and determine its column layout.
///
/// Checks, in order:
/// 1. every required metadata column is present (all absences reported),
/// 2. every non-missing antibiotic value is in {S, I, R} (all offending
///    columns with their full bad-value sets reported),
/// 3. every non-missing `MAR_INDEX` value is numeric,
/// 4. `SNO` values are unique (all duplicates reported).
///
/// No auto-correction, no row dropping, no coercion to missing.
pub fn validate(table: &CsvTable) -> Result<TableSchema> {
    if table.is_empty() {
        return Err(AmrError::EmptyInput);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AmrError::MissingColumns { columns: missing });
    }

    let antibiotics: Vec<String> = table
        .headers
        .iter()
        .filter(|header| !TableSchema::is_required(header))
        .cloned()
        .collect();
    let schema = TableSchema::new(antibiotics);

    check_susceptibility_domain(table, &schema)?;
    check_mar_index_numeric(table)?;
    check_unique_identifiers(table)?;

    debug!(
        isolates = table.rows.len(),
        antibiotics = schema.antibiotic_count(),
        "validated table"
    );
    Ok(schema)
}

fn check_susceptibility_domain(table: &CsvTable, schema: &TableSchema) -> Result<()> {
    let mut violations: Vec<ColumnViolation> = Vec::new();
    for antibiotic in schema.antibiotics() {
        let col = table
            .column_index(antibiotic)
            .expect("antibiotic column derived from headers");
        let mut bad: BTreeSet<String> = BTreeSet::new();
        for row in 0..table.rows.len() {
            let value = table.cell(row, col);
            if value.is_empty() {
                continue;
            }
            if Susceptibility::from_code(value).is_none() {
                bad.insert(value.trim().to_uppercase());
            }
        }
        if !bad.is_empty() {
            violations.push(ColumnViolation::new(antibiotic.clone(), bad));
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AmrError::InvalidCategoricalValues { violations })
    }
}

fn check_mar_index_numeric(table: &CsvTable) -> Result<()> {
    let col = table
        .column_index(columns::MAR_INDEX)
        .expect("required column checked");
    let mut bad: BTreeSet<String> = BTreeSet::new();
    for row in 0..table.rows.len() {
        let value = table.cell(row, col);
        if value.is_empty() {
            continue;
        }
        if parse_f64(value).is_none() {
            bad.insert(value.to_string());
        }
    }
    if bad.is_empty() {
        Ok(())
    } else {
        Err(AmrError::InvalidNumericValues {
            column: columns::MAR_INDEX.to_string(),
            values: bad,
        })
    }
}

fn check_unique_identifiers(table: &CsvTable) -> Result<()> {
    let col = table
        .column_index(columns::SNO)
        .expect("required column checked");
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in 0..table.rows.len() {
        *counts.entry(table.cell(row, col).to_string()).or_default() += 1;
    }
    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(value, _)| value)
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(AmrError::DuplicateIdentifiers { values: duplicates })
    }
}
