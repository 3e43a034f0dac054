//! The closed S/I/R susceptibility vocabulary.
//!
//! Every antibiotic cell that survives validation belongs to this domain.
//! The numeric score and display label maps are fixed:
//! S -> 0.0 "Sensitive", I -> 0.5 "Intermediate", R -> 1.0 "Resistant".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Susceptibility {
    Sensitive,
    Intermediate,
    Resistant,
}

impl Susceptibility {
    /// All categories in score order.
    pub const ALL: [Susceptibility; 3] = [
        Susceptibility::Sensitive,
        Susceptibility::Intermediate,
        Susceptibility::Resistant,
    ];

    /// The single-letter code used in input files.
    pub fn code(&self) -> &'static str {
        match self {
            Susceptibility::Sensitive => "S",
            Susceptibility::Intermediate => "I",
            Susceptibility::Resistant => "R",
        }
    }

    /// The display label attached to long-format rows.
    pub fn label(&self) -> &'static str {
        match self {
            Susceptibility::Sensitive => "Sensitive",
            Susceptibility::Intermediate => "Intermediate",
            Susceptibility::Resistant => "Resistant",
        }
    }

    /// The numeric resistance score.
    pub fn score(&self) -> f64 {
        match self {
            Susceptibility::Sensitive => 0.0,
            Susceptibility::Intermediate => 0.5,
            Susceptibility::Resistant => 1.0,
        }
    }

    /// Parse a raw cell value. Case-insensitive, surrounding whitespace
    /// ignored. Returns `None` for anything outside {S, I, R}.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "S" => Some(Susceptibility::Sensitive),
            "I" => Some(Susceptibility::Intermediate),
            "R" => Some(Susceptibility::Resistant),
            _ => None,
        }
    }

    /// Recover the category from an encoded score.
    pub fn from_score(score: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.score() == score)
    }
}

impl fmt::Display for Susceptibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Susceptibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("invalid susceptibility value: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for category in Susceptibility::ALL {
            assert_eq!(Susceptibility::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            Susceptibility::from_code(" r "),
            Some(Susceptibility::Resistant)
        );
        assert_eq!(
            Susceptibility::from_code("s"),
            Some(Susceptibility::Sensitive)
        );
        assert_eq!(Susceptibility::from_code("X"), None);
        assert_eq!(Susceptibility::from_code(""), None);
    }

    #[test]
    fn score_round_trip() {
        for category in Susceptibility::ALL {
            assert_eq!(
                Susceptibility::from_score(category.score()),
                Some(category)
            );
        }
        assert_eq!(Susceptibility::from_score(0.25), None);
    }
}
