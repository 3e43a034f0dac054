//! User-selected categorical subsetting.
//!
//! A selection is a set of accepted values per filterable column. `None`
//! means "all observed values" (the default UI state); an explicit empty set
//! selects nothing and yields an empty downstream dataset rather than an
//! error.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    genders: Option<BTreeSet<String>>,
    sample_types: Option<BTreeSet<String>>,
}

impl FilterSelection {
    /// No restriction on either column.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_genders<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genders = Some(canonicalize(values));
        self
    }

    pub fn with_sample_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sample_types = Some(canonicalize(values));
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.genders.is_none() && self.sample_types.is_none()
    }

    /// Whether an isolate with the given gender and sample type passes the
    /// selection. Matching is case-insensitive on trimmed values.
    pub fn matches(&self, gender: &str, sample_type: &str) -> bool {
        accepts(self.genders.as_ref(), gender) && accepts(self.sample_types.as_ref(), sample_type)
    }

    pub fn genders(&self) -> Option<&BTreeSet<String>> {
        self.genders.as_ref()
    }

    pub fn sample_types(&self) -> Option<&BTreeSet<String>> {
        self.sample_types.as_ref()
    }
}

fn accepts(selected: Option<&BTreeSet<String>>, value: &str) -> bool {
    match selected {
        None => true,
        Some(set) => set.contains(&canonical(value)),
    }
}

fn canonicalize<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| canonical(value.as_ref()))
        .collect()
}

fn canonical(value: &str) -> String {
    value.trim().to_uppercase()
}
