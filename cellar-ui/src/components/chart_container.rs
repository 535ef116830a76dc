//! Container for the D3.js table and charts.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the widget renders into
    pub id: String,
    /// Optional heading above the widget
    #[props(default = String::new())]
    pub title: String,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A titled container div for a D3.js widget.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        section {
            class: "widget",
            style: "margin: 16px 0;",
            if !props.title.is_empty() {
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 15px;",
                    "{props.title}"
                }
            }
            div {
                style: "{style}",
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
