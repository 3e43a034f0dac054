//! Property tests for the syntactic stages.

use amr_core::normalize_header;
use amr_model::Susceptibility;
use proptest::prelude::{ProptestConfig, proptest};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn header_normalization_is_idempotent(raw in "[ -~]{0,24}") {
        let once = normalize_header(&raw);
        let twice = normalize_header(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalized_headers_contain_no_spaces_or_slashes(raw in "[ -~]{0,24}") {
        let normalized = normalize_header(&raw);
        assert!(!normalized.contains(' '));
        assert!(!normalized.contains('/'));
        assert!(!normalized.starts_with(char::is_whitespace));
    }

    #[test]
    fn unknown_codes_never_parse(raw in "[a-hj-qt-zA-HJ-QT-Z0-9]{1,4}") {
        // Anything not spelled exactly S, I, or R stays outside the domain.
        assert_eq!(Susceptibility::from_code(&raw), None);
    }
}

#[test]
fn encoding_is_a_bijection_on_the_sir_domain() {
    for category in Susceptibility::ALL {
        let encoded = category.score();
        let decoded = Susceptibility::from_score(encoded).expect("score maps back");
        assert_eq!(decoded, category);
        assert_eq!(decoded.label(), category.label());
        assert_eq!(Susceptibility::from_code(category.code()), Some(category));
    }
    assert_eq!(Susceptibility::Sensitive.score(), 0.0);
    assert_eq!(Susceptibility::Intermediate.score(), 0.5);
    assert_eq!(Susceptibility::Resistant.score(), 1.0);
    assert_eq!(Susceptibility::Sensitive.label(), "Sensitive");
    assert_eq!(Susceptibility::Intermediate.label(), "Intermediate");
    assert_eq!(Susceptibility::Resistant.label(), "Resistant");
}
