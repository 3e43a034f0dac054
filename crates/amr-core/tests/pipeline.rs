//! End-to-end pipeline tests.

use std::collections::BTreeSet;

use amr_core::{process, string_values};
use amr_ingest::CsvTable;
use amr_model::{AmrError, FilterSelection, columns};

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

fn two_isolates() -> CsvTable {
    table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "S", "S"],
        ],
    )
}

fn sno_set(df: &polars::prelude::DataFrame) -> BTreeSet<String> {
    string_values(df, columns::SNO)
        .expect("SNO column")
        .into_iter()
        .collect()
}

#[test]
fn reference_dataset_statistics() {
    let result = process(&two_isolates(), &FilterSelection::all()).expect("pipeline");
    assert_eq!(result.isolate_count(), 2);
    assert_eq!(result.report.prevalence.mdr_percent, 50.0);
    assert_eq!(result.report.prevalence.esbl_percent, 50.0);
    assert_eq!(result.report.mar_risk.high_risk_count, 1);

    let amx: Vec<_> = result
        .report
        .resistance_summary
        .iter()
        .filter(|row| row.antibiotic == "AMX")
        .collect();
    assert_eq!(amx.len(), 2);
    assert_eq!(amx[0].label, "Sensitive");
    assert_eq!(amx[0].percent, 50.0);
    assert_eq!(amx[1].label, "Resistant");
    assert_eq!(amx[1].percent, 50.0);
}

#[test]
fn long_row_count_matches_wide_times_antibiotics() {
    let result = process(&two_isolates(), &FilterSelection::all()).expect("pipeline");
    assert_eq!(
        result.long.height(),
        result.wide.height() * result.schema.antibiotic_count()
    );
}

#[test]
fn missing_cells_are_dropped_from_the_long_view() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", ""],
            &["2", "Blood", "M", "NO", "NO", "0.1", "", "S"],
        ],
    );
    let result = process(&t, &FilterSelection::all()).expect("pipeline");
    // 2 isolates x 2 antibiotics - 2 missing cells
    assert_eq!(result.long.height(), 2);
    // Observed-only denominator: AMX has one result, 100% resistant.
    let amx: Vec<_> = result
        .report
        .resistance_summary
        .iter()
        .filter(|row| row.antibiotic == "AMX")
        .collect();
    assert_eq!(amx.len(), 1);
    assert_eq!(amx[0].label, "Resistant");
    assert_eq!(amx[0].percent, 100.0);
}

#[test]
fn views_stay_referentially_consistent_under_filtering() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "S", "S"],
            &["3", "Urine", "M", "NO", "YES", "0.4", "R", "R"],
        ],
    );
    let selection = FilterSelection::all().with_genders(["M"]);
    let result = process(&t, &selection).expect("pipeline");
    let expected: BTreeSet<String> = ["2", "3"].iter().map(|s| (*s).to_string()).collect();
    assert_eq!(sno_set(&result.wide), expected);
    assert_eq!(sno_set(&result.encoded), expected);
    assert_eq!(sno_set(&result.long), expected);
    // Aggregates must not leak unfiltered rows.
    assert_eq!(result.report.prevalence.total_isolates, 2);
    assert_eq!(result.report.prevalence.mdr_count, 1);
}

#[test]
fn filtering_by_all_observed_values_is_a_no_op() {
    let t = two_isolates();
    let unfiltered = process(&t, &FilterSelection::all()).expect("pipeline");
    let selection = FilterSelection::all()
        .with_genders(["F", "M"])
        .with_sample_types(["Urine", "Blood"]);
    let filtered = process(&t, &selection).expect("pipeline");
    assert_eq!(filtered.wide.height(), unfiltered.wide.height());
    assert_eq!(filtered.long.height(), unfiltered.long.height());
    assert_eq!(filtered.report, unfiltered.report);
}

#[test]
fn empty_gender_selection_empties_every_view() {
    let result = process(
        &two_isolates(),
        &FilterSelection::all().with_genders(Vec::<String>::new()),
    )
    .expect("pipeline");
    assert_eq!(result.wide.height(), 0);
    assert_eq!(result.encoded.height(), 0);
    assert_eq!(result.long.height(), 0);
    assert_eq!(result.report.prevalence.total_isolates, 0);
    assert_eq!(result.report.prevalence.mdr_percent, 0.0);
    assert_eq!(result.report.mar_risk.median_mar_index, None);
}

#[test]
fn metadata_is_canonicalized_in_the_wide_view() {
    let t = table(
        &[" sno ", "Sample Type", "gender", "Esbl", "mdr", "MAR Index", "AMX"],
        &[&["1", "Urine", "f", "yes", "no", "0.1", "r"]],
    );
    let result = process(&t, &FilterSelection::all()).expect("pipeline");
    assert_eq!(string_values(&result.wide, "GENDER").unwrap(), vec!["F"]);
    assert_eq!(string_values(&result.wide, "ESBL").unwrap(), vec!["YES"]);
    assert_eq!(string_values(&result.wide, "MDR").unwrap(), vec!["NO"]);
    assert_eq!(string_values(&result.wide, "AMX").unwrap(), vec!["R"]);
}

#[test]
fn validation_failure_yields_no_result() {
    let t = table(
        &HEADERS,
        &[&["1", "Urine", "F", "YES", "YES", "0.3", "X", "S"]],
    );
    let error = process(&t, &FilterSelection::all()).expect_err("invalid input");
    match error {
        AmrError::InvalidCategoricalValues { violations } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].column, "AMX");
            assert_eq!(
                violations[0].values.iter().cloned().collect::<Vec<_>>(),
                vec!["X"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn high_risk_subset_applies_the_threshold_to_filtered_rows() {
    let t = table(
        &HEADERS,
        &[
            &["1", "Urine", "F", "YES", "YES", "0.3", "R", "S"],
            &["2", "Blood", "M", "NO", "NO", "0.1", "S", "S"],
            &["3", "Urine", "M", "NO", "YES", "0.21", "R", "R"],
            &["4", "Urine", "F", "NO", "NO", "0.2", "S", "S"],
        ],
    );
    let result = process(&t, &FilterSelection::all()).expect("pipeline");
    assert_eq!(sno_set(&result.high_risk), BTreeSet::from(["1".to_string(), "3".to_string()]));
    // Threshold is strictly greater-than.
    assert_eq!(result.report.mar_risk.high_risk_count, 2);
    assert_eq!(result.report.mar_risk.high_risk_percent, 50.0);
}
