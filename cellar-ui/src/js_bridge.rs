//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js table and bar chart live in `assets/js/*.js`. They are evaluated
//! as globals (no ES modules) and exposed via `window.*`. This module
//! serializes payloads and calls those globals, and wraps the browser
//! `fetch` used by the network fallback source.

use anyhow::{anyhow, bail};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Embed widget JS files at compile time
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Cellar JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize widget scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is present, then each entry point is promoted to `window.*`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_widgets() {
    let all_js = [DATA_TABLE_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__cellarWidgetsReady) {{ window.__cellarWidgetScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cellarWidgetsReady || window.__cellarWidgetsPolling) return;
            window.__cellarWidgetsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__cellarWidgetScripts);
                    delete window.__cellarWidgetScripts;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__cellarWidgetsReady = true;
                    console.log('Cellar widgets initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, data, config)` once D3, the widget
/// scripts and the container element are all available.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cellarWidgetsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Cellar] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the sortable, paginated wine table. Every call redraws it in full.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Render one bar chart. Every call rebuilds the chart from scratch.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a widget in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// GET `url` and return the body as text.
///
/// Transport errors and non-2xx statuses are both errors.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {} failed: {:?}", url, e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch {} did not return a Response", url))?;

    if !response.ok() {
        bail!("HTTP {} for {}", response.status(), url);
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("reading {} failed: {:?}", url, e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading {} failed: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("body of {} is not text", url))
}
