//! Wine Inventory Table
//!
//! Summary cards, four filter dropdowns (country, style, vintage, grape), a
//! free-text search box and a sortable, paginated D3.js table.
//!
//! Data flow:
//! 1. `build.rs` copies `wines.json` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary; `./data/wines.json`
//!    is fetched only if the embedded copy is missing or unreadable.
//! 3. On mount, the records are loaded once and the filter options derived.
//! 4. Whenever a filter or the search text changes, or "Clear filters"
//!    resets them, the matching rows are passed to `renderDataTable()` and
//!    the table is redrawn in full.

use cellar_core::filters::FilterColumn;
use cellar_core::summary::summarize;
use cellar_core::views;
use cellar_ui::components::{
    ChartContainer, ErrorDisplay, FilterSelect, LoadingSpinner, PageHeader, SearchBox,
    SummaryCards,
};
use cellar_ui::config::TABLE_ID;
use cellar_ui::js_bridge;
use cellar_ui::state::AppState;
use cellar_ui::storage;
use dioxus::prelude::*;

/// The wine dataset, embedded at build time.
const WINES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/wines.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    storage::apply_saved_theme();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wine-table-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Load records once on mount
    use_effect(move || {
        spawn(async move {
            state.load(WINES_JSON).await;
            js_bridge::init_widgets();
        });
    });

    // Redraw the table whenever the records or filters change
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let records = (state.records)();
        let filters = state.filters.read().clone();

        let rows = views::table_rows(&records, &filters);
        log::info!(
            "[Cellar] wine-table: Rendering {} of {} wines",
            rows.len(),
            records.len()
        );

        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::to_string(&views::table_config()).unwrap_or_default();
        js_bridge::render_data_table(TABLE_ID, &data_json, &config_json);
    });

    let summary = use_memo(move || summarize(&state.records.read()));
    let vocabulary = state.vocabulary.read().clone();
    let filtering = state.filters.read().is_active();

    let mut filters = state.filters;
    let on_clear = move |_: Event<MouseData>| {
        filters.write().clear();
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Wine Cellar".to_string(),
                subtitle: "Inventory with filters by country, style, vintage and grape".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                SummaryCards { summary: summary() }

                div {
                    id: "filters",
                    style: "display: flex; gap: 12px; flex-wrap: wrap; align-items: flex-end; margin-bottom: 8px;",
                    FilterSelect { column: FilterColumn::Country, options: vocabulary.countries.clone() }
                    FilterSelect { column: FilterColumn::Style, options: vocabulary.styles.clone() }
                    FilterSelect { column: FilterColumn::Vintage, options: vocabulary.vintages.clone() }
                    FilterSelect { column: FilterColumn::Grape, options: vocabulary.grapes.clone() }
                    SearchBox {}
                    button {
                        id: "clear-filters",
                        r#type: "button",
                        disabled: !filtering,
                        style: "padding: 4px 10px; border-radius: 4px; border: 1px solid #999; background: transparent; color: inherit; cursor: pointer;",
                        onclick: on_clear,
                        "Clear filters"
                    }
                }

                ChartContainer {
                    id: TABLE_ID.to_string(),
                    min_height: 300,
                }
            }
        }
    }
}
