//! Headline figures for the summary cards.

use crate::models::WineRecord;
use cellar_utils::dates::current_year;
use std::collections::HashSet;

/// Placeholder shown when no peak year lies ahead.
pub const NO_PEAK: &str = "-";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Distinct non-empty countries.
    pub countries: usize,
    /// Distinct non-empty styles.
    pub styles: usize,
    /// Smallest peak year not earlier than the current year.
    pub next_peak: Option<i32>,
}

impl Summary {
    pub fn next_peak_label(&self) -> String {
        self.next_peak
            .map(|year| year.to_string())
            .unwrap_or_else(|| NO_PEAK.to_string())
    }
}

/// Summarize `records` relative to the current calendar year.
pub fn summarize(records: &[WineRecord]) -> Summary {
    summarize_at(records, current_year())
}

/// Summarize `records` as seen from `year`.
pub fn summarize_at(records: &[WineRecord], year: i32) -> Summary {
    let countries: HashSet<&str> = records.iter().filter_map(WineRecord::country).collect();
    let styles: HashSet<&str> = records.iter().filter_map(WineRecord::style).collect();

    Summary {
        total: records.len(),
        countries: countries.len(),
        styles: styles.len(),
        next_peak: nearest_upcoming_peak(records, year),
    }
}

/// The smallest parseable peak year that is `>= year`, if any.
pub fn nearest_upcoming_peak(records: &[WineRecord], year: i32) -> Option<i32> {
    records
        .iter()
        .filter_map(WineRecord::peak_year)
        .filter(|peak| *peak >= year)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_peak(peak: &str) -> WineRecord {
        WineRecord {
            peak: Some(peak.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn picks_smallest_upcoming_peak() {
        let records: Vec<WineRecord> = ["2020", "2030", "2025", "n/a"]
            .into_iter()
            .map(with_peak)
            .collect();
        assert_eq!(nearest_upcoming_peak(&records, 2024), Some(2025));
    }

    #[test]
    fn current_year_counts_as_upcoming() {
        let records = vec![with_peak("2024"), with_peak("2026")];
        assert_eq!(nearest_upcoming_peak(&records, 2024), Some(2024));
    }

    #[test]
    fn no_upcoming_peak() {
        let records = vec![with_peak("2019"), with_peak("2018")];
        let summary = summarize_at(&records, 2024);
        assert_eq!(summary.next_peak, None);
        assert_eq!(summary.next_peak_label(), "-");
    }

    #[test]
    fn counts_distinct_values() {
        let records = vec![
            WineRecord {
                country: Some("France".into()),
                style: Some("Red".into()),
                ..Default::default()
            },
            WineRecord {
                country: Some("France".into()),
                style: Some("White".into()),
                ..Default::default()
            },
            WineRecord::default(),
        ];
        let summary = summarize_at(&records, 2024);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.countries, 1);
        assert_eq!(summary.styles, 2);
    }

    #[test]
    fn empty_dataset() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.next_peak_label(), NO_PEAK);
    }
}
