//! Button that flips and persists the dark-mode preference.

use crate::state::AppState;
use crate::storage;
use dioxus::prelude::*;

#[component]
pub fn DarkModeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    let on_click = move |_: Event<MouseData>| {
        let dark = storage::toggle_theme((state.dark_mode)());
        state.dark_mode.set(dark);
    };

    rsx! {
        button {
            id: "dark-mode-toggle",
            r#type: "button",
            title: "Toggle dark mode",
            style: "padding: 6px 12px; border-radius: 4px; border: 1px solid #999; background: transparent; color: inherit; cursor: pointer;",
            onclick: on_click,
            if dark { "Light mode" } else { "Dark mode" }
        }
    }
}
