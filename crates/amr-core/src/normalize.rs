//! Header canonicalization.
//!
//! Purely syntactic: trim, uppercase, and map spaces and slashes to
//! underscores. No validation happens here.

use amr_ingest::CsvTable;

/// Canonicalize a single column name.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' => '_',
            other => other,
        })
        .collect()
}

/// Return a copy of the table with canonical column names.
///
/// Idempotent: normalizing an already-normalized header set is a no-op.
pub fn normalize_headers(table: &CsvTable) -> CsvTable {
    let headers = table
        .headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();
    CsvTable::new(headers, table.rows.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(normalize_header(" sample type "), "SAMPLE_TYPE");
        assert_eq!(normalize_header("mar index"), "MAR_INDEX");
        assert_eq!(normalize_header("amox/clav"), "AMOX_CLAV");
        assert_eq!(normalize_header("SNO"), "SNO");
    }

    #[test]
    fn consecutive_separators_map_one_to_one() {
        assert_eq!(normalize_header("a  b"), "A__B");
        assert_eq!(normalize_header("a /b"), "A__B");
    }

    #[test]
    fn normalization_is_idempotent() {
        let table = CsvTable::new(
            vec![" sno".to_string(), "Sample Type".to_string()],
            vec![vec!["1".to_string(), "Urine".to_string()]],
        );
        let once = normalize_headers(&table);
        let twice = normalize_headers(&once);
        assert_eq!(once, twice);
        assert_eq!(once.headers, vec!["SNO", "SAMPLE_TYPE"]);
        // Cell values are untouched
        assert_eq!(once.rows, table.rows);
    }
}
