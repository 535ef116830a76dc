//! Distinct filter options derived from the loaded records.

use crate::models::WineRecord;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// Sorted, de-duplicated option lists for the four discrete table filters.
///
/// Values are compared verbatim: "France" and "france" are two options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterVocabulary {
    pub countries: Vec<String>,
    pub styles: Vec<String>,
    pub vintages: Vec<String>,
    pub grapes: Vec<String>,
}

/// Build every filter vocabulary in a single pass over `records`.
pub fn build_vocabulary(records: &[WineRecord]) -> FilterVocabulary {
    let mut countries = BTreeSet::new();
    let mut styles = BTreeSet::new();
    let mut vintages = HashSet::new();
    let mut grapes = BTreeSet::new();

    for record in records {
        if let Some(country) = record.country() {
            countries.insert(country);
        }
        if let Some(style) = record.style() {
            styles.insert(style);
        }
        if let Some(vintage) = record.vintage() {
            vintages.insert(vintage);
        }
        grapes.extend(record.grape_varieties());
    }

    let mut vintages: Vec<&str> = vintages.into_iter().collect();
    vintages.sort_by(|a, b| locale_cmp(a, b));

    FilterVocabulary {
        countries: countries.into_iter().map(String::from).collect(),
        styles: styles.into_iter().map(String::from).collect(),
        vintages: vintages.into_iter().map(String::from).collect(),
        grapes: grapes.into_iter().map(String::from).collect(),
    }
}

/// Case-insensitive ordering with lowercase first on ties, close to what a
/// browser's default `localeCompare` gives for vintage labels.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
