//! Integration tests for strict validation.

use amr_core::normalize::normalize_headers;
use amr_core::validate::validate;
use amr_ingest::CsvTable;
use amr_model::AmrError;

fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
    CsvTable::new(
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

const HEADERS: [&str; 8] = [
    "SNO",
    "SAMPLE_TYPE",
    "GENDER",
    "ESBL",
    "MDR",
    "MAR_INDEX",
    "AMX",
    "CIP",
];

#[test]
fn accepts_a_clean_table_and_orders_antibiotics_by_header() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "s", "i"],
        ],
    );
    let schema = validate(&t).expect("valid table");
    assert_eq!(schema.antibiotics(), ["AMX", "CIP"]);
}

#[test]
fn reports_every_missing_required_column() {
    let t = table(&["SAMPLE_TYPE", "GENDER", "ESBL", "AMX"], &[]);
    let error = validate(&t).expect_err("missing columns");
    match error {
        AmrError::MissingColumns { columns } => {
            assert_eq!(columns, vec!["SNO", "MDR", "MAR_INDEX"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_sno_is_reported_even_when_everything_else_is_present() {
    let t = table(
        &["SAMPLE_TYPE", "GENDER", "ESBL", "MDR", "MAR_INDEX", "AMX"],
        &[&["Urine", "F", "YES", "YES", "0.3", "R"]],
    );
    let error = validate(&t).expect_err("missing SNO");
    match error {
        AmrError::MissingColumns { columns } => assert_eq!(columns, vec!["SNO"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reports_every_bad_susceptibility_column_with_full_value_sets() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "X", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "pos", "Q"],
            &["3", "Urine", "F", "NO", "NO", "0.2", "R", "Q"],
        ],
    );
    let error = validate(&t).expect_err("invalid values");
    match error {
        AmrError::InvalidCategoricalValues { violations } => {
            assert_eq!(violations.len(), 2);
            assert_eq!(violations[0].column, "AMX");
            assert_eq!(
                violations[0].values.iter().cloned().collect::<Vec<_>>(),
                vec!["POS", "X"]
            );
            assert_eq!(violations[1].column, "CIP");
            assert_eq!(
                violations[1].values.iter().cloned().collect::<Vec<_>>(),
                vec!["Q"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn susceptibility_check_is_case_insensitive_and_ignores_missing() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "r", ""],
            &["2", "Blood", "M", "NO", "NO", "0.1", "", "i"],
        ],
    );
    assert!(validate(&t).is_ok());
}

#[test]
fn rejects_non_numeric_mar_index_values() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "high", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "n/a", "S", "S"],
        ],
    );
    let error = validate(&t).expect_err("non-numeric MAR");
    match error {
        AmrError::InvalidNumericValues { column, values } => {
            assert_eq!(column, "MAR_INDEX");
            assert_eq!(
                values.iter().cloned().collect::<Vec<_>>(),
                vec!["high", "n/a"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_duplicate_isolate_identifiers() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "S", "S"],
            &["1", "Urine", "F", "NO", "NO", "0.2", "S", "S"],
            &["2", "Pus", "M", "NO", "NO", "0.2", "S", "S"],
        ],
    );
    let error = validate(&t).expect_err("duplicate SNO");
    match error {
        AmrError::DuplicateIdentifiers { values } => assert_eq!(values, vec!["1", "2"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_table_is_rejected() {
    let error = validate(&CsvTable::default()).expect_err("empty table");
    assert!(matches!(error, AmrError::EmptyInput));
}

#[test]
fn validation_runs_on_normalized_headers() {
    let t = table(
        &[" sno ", "Sample Type", "gender", "Esbl", "mdr", "MAR Index", "amox/clav"],
        &[&["1", "Urine", "F", "YES", "NO", "0.1", "R"]],
    );
    let normalized = normalize_headers(&t);
    let schema = validate(&normalized).expect("valid after normalization");
    assert_eq!(schema.antibiotics(), ["AMOX_CLAV"]);
}
