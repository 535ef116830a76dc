//! Dropdown bound to one discrete table filter.

use crate::state::AppState;
use cellar_core::filters::FilterColumn;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    pub column: FilterColumn,
    pub options: Vec<String>,
}

/// Filter dropdown. The empty "All" option clears the column's predicate.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let mut state = use_context::<AppState>();
    let column = props.column;
    let selected = state.filters.read().get(column).unwrap_or("").to_string();
    let id = column.control_id();
    let caption = column.label();

    let on_change = move |evt: Event<FormData>| {
        state.filters.write().set(column, &evt.value());
    };

    rsx! {
        label {
            r#for: "{id}",
            style: "display: flex; flex-direction: column; font-size: 12px; font-weight: bold; gap: 2px;",
            "{caption}"
            select {
                id: "{id}",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All"
                }
                for value in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
