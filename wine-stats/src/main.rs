//! Wine Inventory Statistics
//!
//! Summary cards plus three D3.js bar charts: wines per country, per vintage
//! and per style. Each chart uses a monochrome ramp derived from the theme
//! color and axis colors that follow the dark-mode preference.
//!
//! Data flow:
//! 1. `build.rs` copies `wines.json` into `OUT_DIR`; `include_str!` embeds it.
//! 2. On mount, the records are loaded once (network fallback if needed).
//! 3. Whenever the records or the dark-mode flag change, the three frequency
//!    tables are rebuilt and each chart is re-rendered from scratch.

use cellar_core::aggregate::{aggregate_by, AggregateField};
use cellar_core::summary::summarize;
use cellar_core::views;
use cellar_ui::components::{
    ChartContainer, ErrorDisplay, LoadingSpinner, PageHeader, SummaryCards,
};
use cellar_ui::config::{COUNTRY_CHART_ID, STYLE_CHART_ID, THEME_COLOR, VINTAGE_CHART_ID};
use cellar_ui::js_bridge;
use cellar_ui::state::AppState;
use cellar_ui::storage;
use dioxus::prelude::*;

/// The wine dataset, embedded at build time.
const WINES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/wines.json"));

/// Chart container id, title and grouping field for each chart.
const CHARTS: [(&str, &str, AggregateField); 3] = [
    (COUNTRY_CHART_ID, "Wines by country", AggregateField::Country),
    (VINTAGE_CHART_ID, "Wines by vintage", AggregateField::Vintage),
    (STYLE_CHART_ID, "Wines by style", AggregateField::Style),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    storage::apply_saved_theme();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wine-stats-root"))
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

    // Rebuild every chart when the records or the theme change
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let records = (state.records)();
        let dark = (state.dark_mode)();

        for (chart_id, title, field) in CHARTS {
            let counts = aggregate_by(&records, field);
            let payload = match views::chart_payload(title, &counts, THEME_COLOR, dark) {
                Ok(p) => p,
                Err(e) => {
                    log::error!("[Cellar] wine-stats: Failed to build {}: {}", title, e);
                    js_bridge::destroy_chart(chart_id);
                    continue;
                }
            };
            let data_json = serde_json::to_string(&payload).unwrap_or_default();
            let config_json = serde_json::json!({ "height": 300 }).to_string();
            js_bridge::render_bar_chart(chart_id, &data_json, &config_json);
        }
    });

    let summary = use_memo(move || summarize(&state.records.read()));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Cellar Statistics".to_string(),
                subtitle: "Bottle counts grouped by country, vintage and style".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                SummaryCards { summary: summary() }

                for (chart_id, title, _) in CHARTS {
                    ChartContainer {
                        key: "{chart_id}",
                        id: chart_id.to_string(),
                        title: title.to_string(),
                        min_height: 300,
                    }
                }
            }
        }
    }
}
