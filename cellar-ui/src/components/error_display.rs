//! Notice shown when the page has no wines to show.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #fbe9ee; color: #7b1e3a; border-radius: 4px; border: 1px solid #e3a6b8;",
            strong { "No data: " }
            "{props.message}"
        }
    }
}
