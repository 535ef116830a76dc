//! Summary figures shown above the table and charts.

use cellar_core::summary::Summary;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Summary,
}

#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let summary = props.summary;
    let next_peak = summary.next_peak_label();

    rsx! {
        div {
            id: "summary",
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 8px 0 16px 0;",
            Card { label: "Wines".to_string(), value: summary.total.to_string() }
            Card { label: "Countries".to_string(), value: summary.countries.to_string() }
            Card { label: "Styles".to_string(), value: summary.styles.to_string() }
            Card { label: "Next peak".to_string(), value: next_peak }
        }
    }
}

#[component]
fn Card(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "summary-card",
            style: "flex: 1 1 120px; padding: 12px 16px; border-radius: 6px; border: 1px solid rgba(128, 128, 128, 0.35);",
            div {
                style: "font-size: 12px; opacity: 0.7; text-transform: uppercase;",
                "{label}"
            }
            div {
                style: "font-size: 24px; font-weight: bold;",
                "{value}"
            }
        }
    }
}
