//! Per-field frequency tables for the bar charts.

use crate::models::WineRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Bucket for records without a vintage.
pub const OTHER_VINTAGE: &str = "Other";
/// Bucket for records without a style.
pub const UNKNOWN_STYLE: &str = "Unknown";

/// Fields the charts group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateField {
    /// Records without a country are skipped.
    Country,
    /// Records without a vintage count toward [`OTHER_VINTAGE`].
    Vintage,
    /// Records without a style count toward [`UNKNOWN_STYLE`].
    Style,
}

impl AggregateField {
    fn key<'a>(self, record: &'a WineRecord) -> Option<&'a str> {
        match self {
            AggregateField::Country => record.country(),
            AggregateField::Vintage => Some(record.vintage().unwrap_or(OTHER_VINTAGE)),
            AggregateField::Style => Some(record.style().unwrap_or(UNKNOWN_STYLE)),
        }
    }
}

/// Occurrence counts keyed by category, in first-seen order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateCounts(IndexMap<String, usize>);

impl AggregateCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        *self.0.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.0.values().copied().collect()
    }
}

/// Count records per value of `field` in a single pass.
pub fn aggregate_by(records: &[WineRecord], field: AggregateField) -> AggregateCounts {
    let mut counts = AggregateCounts::new();
    for key in records.iter().filter_map(|r| field.key(r)) {
        counts.increment(key);
    }
    counts
}
