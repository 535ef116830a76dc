//! JSON payloads for the D3.js table and bar chart widgets.
//!
//! The widgets only see plain JSON: rows plus a config object for the table,
//! labels/values/colors plus axis styling for each bar chart.

use crate::aggregate::AggregateCounts;
use crate::filters::TableFilters;
use crate::models::{TableColumn, WineRecord};
use cellar_utils::color;
use serde_json::{json, Map, Value};

/// Rows shown per table page.
pub const PAGE_LENGTH: usize = 10;

/// Tooltip unit appended to bar values ("3 wines").
pub const TOOLTIP_UNIT: &str = "wines";

/// Notice shown in place of the page content when no wines were loaded.
pub const NO_WINES_MESSAGE: &str =
    "No wines could be loaded. Check that data/wines.json is present.";

/// The notice to show for `records`, if any.
pub fn empty_notice(records: &[WineRecord]) -> Option<&'static str> {
    records.is_empty().then_some(NO_WINES_MESSAGE)
}

/// Axis styling for the current presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub tick_color: &'static str,
    pub grid_color: &'static str,
}

impl ChartTheme {
    pub const LIGHT: ChartTheme = ChartTheme {
        tick_color: "#333333",
        grid_color: "#dddddd",
    };

    pub const DARK: ChartTheme = ChartTheme {
        tick_color: "#e0e0e0",
        grid_color: "#444444",
    };

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// One row object per record passing `filters`.
pub fn table_rows(records: &[WineRecord], filters: &TableFilters) -> Vec<Value> {
    filters
        .apply(records)
        .into_iter()
        .map(|record| {
            let row: Map<String, Value> = TableColumn::ALL
                .iter()
                .map(|c| (c.key().to_string(), Value::from(record.column_text(*c))))
                .collect();
            Value::Object(row)
        })
        .collect()
}

/// Column definitions, paging, default sort and UI strings for the table.
pub fn table_config() -> Value {
    let columns: Vec<Value> = TableColumn::ALL
        .iter()
        .map(|c| {
            let kind = if *c == TableColumn::Peak { "number" } else { "text" };
            json!({
                "key": c.key(),
                "label": c.label(),
                "sortable": true,
                "type": kind,
            })
        })
        .collect();

    json!({
        "columns": columns,
        "pageLength": PAGE_LENGTH,
        "defaultSort": {"key": TableColumn::Name.key(), "direction": "asc"},
        "language": {
            "info": "Showing _START_ to _END_ of _TOTAL_ wines",
            "infoEmpty": "No wines to show",
            "emptyTable": "No wines found",
            "previous": "Previous",
            "next": "Next",
        },
    })
}

/// Bar chart payload: one bar per key, a color ramp from `base_color`, and
/// theme-aware axis colors.
pub fn chart_payload(
    title: &str,
    counts: &AggregateCounts,
    base_color: &str,
    dark: bool,
) -> anyhow::Result<Value> {
    let theme = ChartTheme::for_mode(dark);
    Ok(json!({
        "title": title,
        "labels": counts.labels(),
        "values": counts.values(),
        "colors": color::ramp(base_color, counts.len())?,
        "axis": {
            "tickColor": theme.tick_color,
            "gridColor": theme.grid_color,
        },
        "tooltipUnit": TOOLTIP_UNIT,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate_by, AggregateField};
    use crate::filters::FilterColumn;
    use crate::models::parse_records;

    fn records() -> Vec<WineRecord> {
        parse_records(
            r#"[{"nome":"A","pais":"France","estilo":"Red"},
                {"nome":"B","pais":"Chile","estilo":"Red"},
                {"nome":"C","pais":"Chile","estilo":"White"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_filters() {
        let records = records();
        let mut filters = TableFilters::new();
        assert_eq!(table_rows(&records, &filters).len(), 3);

        filters.set(FilterColumn::Country, "Chile");
        let rows = table_rows(&records, &filters);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "B");
        assert_eq!(rows[0]["region"], "");
        assert_eq!(rows[0].as_object().unwrap().len(), TableColumn::ALL.len());
    }

    #[test]
    fn clearing_filters_restores_every_row() {
        let records = records();
        let mut filters = TableFilters::new();
        filters.set(FilterColumn::Style, "White");
        filters.set_search("c");
        assert!(filters.is_active());
        assert_eq!(table_rows(&records, &filters).len(), 1);

        filters.clear();
        assert!(!filters.is_active());
        assert_eq!(table_rows(&records, &filters).len(), 3);
    }

    #[test]
    fn notice_only_for_empty_dataset() {
        assert_eq!(empty_notice(&[]), Some(NO_WINES_MESSAGE));
        assert_eq!(empty_notice(&records()), None);
    }

    #[test]
    fn config_lists_every_column() {
        let config = table_config();
        assert_eq!(config["columns"].as_array().unwrap().len(), 12);
        assert_eq!(config["pageLength"], 10);
        assert_eq!(config["columns"][8]["type"], "number");
    }

    #[test]
    fn chart_payload_matches_counts() {
        let counts = aggregate_by(&records(), AggregateField::Style);
        let payload = chart_payload("By style", &counts, "#7b1e3a", false).unwrap();
        assert_eq!(payload["labels"], json!(["Red", "White"]));
        assert_eq!(payload["values"], json!([2, 1]));
        assert_eq!(payload["colors"].as_array().unwrap().len(), 2);
        assert_eq!(payload["axis"]["tickColor"], ChartTheme::LIGHT.tick_color);
        assert_eq!(payload["tooltipUnit"], "wines");
    }

    #[test]
    fn chart_payload_uses_dark_theme() {
        let counts = aggregate_by(&records(), AggregateField::Country);
        let payload = chart_payload("By country", &counts, "#7b1e3a", true).unwrap();
        assert_eq!(payload["axis"]["tickColor"], "#e0e0e0");
        assert_eq!(payload["axis"]["gridColor"], "#444444");
    }

    #[test]
    fn chart_payload_rejects_bad_color() {
        let counts = aggregate_by(&records(), AggregateField::Country);
        assert!(chart_payload("By country", &counts, "wine", false).is_err());
    }
}
