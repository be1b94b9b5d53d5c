//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Leaflet are loaded from `<script>` tags; the glue functions in
//! `assets/js/*.js` are evaluated as globals once both libraries are present.
//! Every call polls until the bridge is ready and its target exists, so
//! callers never have to care about script load order.
//!
//! Arguments are spliced into the generated JS as JSON literals, which makes
//! them valid, fully escaped JS expressions.

use owd_panels::map::{LatLng, TileSource};
use serde_json::json;

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");
static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// JS literal for any JSON-serializable value.
fn js_literal(value: serde_json::Value) -> String {
    value.to_string()
}

/// Install the bridge functions once Chart.js and Leaflet have loaded.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_bridge() {
    let all_js = [CHART_BRIDGE_JS, MAP_BRIDGE_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them at
    // global scope instead of inside the setInterval closure.
    let store_js = format!(
        "if (!window.__owdBridgeScripts && !window.__owdBridgeReady) {{ window.__owdBridgeScripts = {}; }}",
        js_literal(json!(all_js))
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__owdBridgeReady || window.__owdBridgePolling) return;
            window.__owdBridgePolling = true;
            var waitForLibs = setInterval(function() {
                if (typeof Chart !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__owdBridgeScripts);
                    delete window.__owdBridgeScripts;
                    if (typeof renderChart !== 'undefined') window.owdRenderChart = renderChart;
                    if (typeof createMap !== 'undefined') window.owdCreateMap = createMap;
                    if (typeof addMarker !== 'undefined') window.owdAddMarker = addMarker;
                    window.__owdBridgeReady = true;
                    console.log('OWD bridge initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until `ready_check` holds, then run `body` once.
fn when_ready(ready_check: &str, body: &str, label: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__owdBridgeReady && {ready_check}) {{
                    clearInterval(poll);
                    try {{
                        {body}
                    }} catch(e) {{ console.error('[OWD] {label} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw a Chart.js chart into the canvas `canvas_id`.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let id = js_literal(json!(canvas_id));
    let config = js_literal(json!(config_json));
    when_ready(
        &format!("document.getElementById({id})"),
        &format!("window.owdRenderChart({id}, {config});"),
        "renderChart",
    );
}

/// Create the Leaflet map inside `element_id` with one tile layer.
pub fn create_map(element_id: &str, center: LatLng, zoom: u8, tiles: &TileSource) {
    let id = js_literal(json!(element_id));
    let args = [
        id.clone(),
        js_literal(json!(center.lat)),
        js_literal(json!(center.lon)),
        js_literal(json!(zoom)),
        js_literal(json!(tiles.url_template)),
        js_literal(json!(tiles.max_zoom)),
        js_literal(json!(tiles.attribution)),
    ]
    .join(", ");
    when_ready(
        &format!("document.getElementById({id})"),
        &format!("window.owdCreateMap({args});"),
        "createMap",
    );
}

/// Add a marker with a popup to the map created by [`create_map`].
pub fn add_marker(position: LatLng, popup_html: &str) {
    let args = [
        js_literal(json!(position.lat)),
        js_literal(json!(position.lon)),
        js_literal(json!(popup_html)),
    ]
    .join(", ");
    when_ready(
        "window.__owdMap",
        &format!("window.owdAddMarker({args});"),
        "addMarker",
    );
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}
