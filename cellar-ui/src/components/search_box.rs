//! Free-text search across every table column.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.filters.read().search().unwrap_or("").to_string();

    let on_input = move |evt: Event<FormData>| {
        state.filters.write().set_search(&evt.value());
    };

    rsx! {
        label {
            r#for: "wine-search",
            style: "display: flex; flex-direction: column; font-size: 12px; font-weight: bold; gap: 2px;",
            "Search"
            input {
                id: "wine-search",
                r#type: "search",
                placeholder: "Name, region, pairing...",
                value: "{current}",
                oninput: on_input,
            }
        }
    }
}
