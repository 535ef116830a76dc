//! Column predicates bound to the table's filter controls.
//!
//! Country, style and vintage filters are exact matches. The grape filter is
//! a substring match on the raw grape text since one wine may list several
//! grapes. An empty control value removes the predicate. The free-text search
//! is independent of the discrete filters and all predicates combine with AND.

use crate::models::{TableColumn, WineRecord};

/// Discrete filter controls above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    Country,
    Style,
    Vintage,
    Grape,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Country,
        FilterColumn::Style,
        FilterColumn::Vintage,
        FilterColumn::Grape,
    ];

    /// DOM id of the `<select>` bound to this filter.
    pub fn control_id(self) -> &'static str {
        match self {
            FilterColumn::Country => "filter-country",
            FilterColumn::Style => "filter-style",
            FilterColumn::Vintage => "filter-vintage",
            FilterColumn::Grape => "filter-grape",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Country => "Country",
            FilterColumn::Style => "Style",
            FilterColumn::Vintage => "Vintage",
            FilterColumn::Grape => "Grape",
        }
    }

    /// Table column the predicate is applied to.
    pub fn column(self) -> TableColumn {
        match self {
            FilterColumn::Country => TableColumn::Country,
            FilterColumn::Style => TableColumn::Style,
            FilterColumn::Vintage => TableColumn::Vintage,
            FilterColumn::Grape => TableColumn::Grapes,
        }
    }
}

/// The active predicates of the table view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFilters {
    country: Option<String>,
    style: Option<String>,
    vintage: Option<String>,
    grape: Option<String>,
    search: Option<String>,
}

impl TableFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to a filter control; an empty value clears it.
    pub fn set(&mut self, column: FilterColumn, value: &str) {
        *self.slot_mut(column) = (!value.is_empty()).then(|| value.to_string());
    }

    pub fn get(&self, column: FilterColumn) -> Option<&str> {
        match column {
            FilterColumn::Country => self.country.as_deref(),
            FilterColumn::Style => self.style.as_deref(),
            FilterColumn::Vintage => self.vintage.as_deref(),
            FilterColumn::Grape => self.grape.as_deref(),
        }
    }

    /// Set the free-text search; blank text clears it.
    pub fn set_search(&mut self, text: &str) {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_string());
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        FilterColumn::ALL.iter().any(|c| self.get(*c).is_some()) || self.search.is_some()
    }

    /// Whether `record` passes every active predicate.
    pub fn matches(&self, record: &WineRecord) -> bool {
        let discrete = FilterColumn::ALL.iter().all(|&column| match self.get(column) {
            None => true,
            Some(wanted) => {
                let text = record.column_text(column.column());
                match column {
                    FilterColumn::Grape => text.contains(wanted),
                    _ => text == wanted,
                }
            }
        });
        discrete && self.search.as_deref().map_or(true, |s| search_matches(record, s))
    }

    /// Records passing every active predicate, in input order.
    pub fn apply<'a>(&self, records: &'a [WineRecord]) -> Vec<&'a WineRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn slot_mut(&mut self, column: FilterColumn) -> &mut Option<String> {
        match column {
            FilterColumn::Country => &mut self.country,
            FilterColumn::Style => &mut self.style,
            FilterColumn::Vintage => &mut self.vintage,
            FilterColumn::Grape => &mut self.grape,
        }
    }
}

/// Every whitespace-separated word must occur, case-insensitively, in some column.
fn search_matches(record: &WineRecord, search: &str) -> bool {
    let haystack = TableColumn::ALL
        .iter()
        .map(|c| record.column_text(*c).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    search
        .split_whitespace()
        .all(|word| haystack.contains(&word.to_lowercase()))
}
