//! Page header with title, subtitle and the dark-mode toggle.

use super::DarkModeToggle;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px;",
            div {
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 22px;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "margin: 0; font-size: 13px; opacity: 0.75;",
                        "{props.subtitle}"
                    }
                }
            }
            DarkModeToggle {}
        }
    }
}
