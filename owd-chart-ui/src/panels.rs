//! Browser implementations of the panel traits.

use crate::js_bridge;
use dioxus::prelude::*;
use owd_api::models::{MapStateEntry, Prediction};
use owd_panels::charts::{ChartRenderer, ChartSpec};
use owd_panels::map::{popup_html, LatLng, MapBackend, TileSource};
use owd_panels::prediction::PredictionView;

/// Draws charts with Chart.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsRenderer;

impl ChartRenderer for ChartJsRenderer {
    fn render(&self, target: &str, spec: &ChartSpec) {
        match spec.to_json() {
            Ok(config) => js_bridge::render_chart(target, &config),
            Err(e) => log::error!("Failed to serialize chart for {}: {}", target, e),
        }
    }
}

/// Leaflet map whose container visibility is driven by a signal.
pub struct LeafletMap {
    element_id: &'static str,
    visible: Signal<bool>,
}

impl LeafletMap {
    pub fn new(element_id: &'static str, visible: Signal<bool>) -> Self {
        Self {
            element_id,
            visible,
        }
    }
}

impl MapBackend for LeafletMap {
    fn set_visible(&mut self, visible: bool) {
        self.visible.set(visible);
    }

    fn create_map(&mut self, center: LatLng, zoom: u8, tiles: &TileSource) {
        js_bridge::create_map(self.element_id, center, zoom, tiles);
    }

    fn add_marker(&mut self, position: LatLng, entry: &MapStateEntry) {
        js_bridge::add_marker(position, &popup_html(entry));
    }
}

/// Alerts via `window.alert`; results go to a signal the results region renders.
#[derive(Clone, Copy)]
pub struct AlertPredictionView {
    results: Signal<Option<Prediction>>,
}

impl AlertPredictionView {
    pub fn new(results: Signal<Option<Prediction>>) -> Self {
        Self { results }
    }
}

impl PredictionView for AlertPredictionView {
    fn alert(&self, message: &str) {
        js_bridge::alert(message);
    }

    fn show_results(&self, prediction: &Prediction) {
        let mut results = self.results;
        results.set(Some(prediction.clone()));
    }
}
