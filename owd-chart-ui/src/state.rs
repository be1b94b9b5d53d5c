//! Application state managed via Dioxus context.
//!
//! Two values are provided at the root with `use_context_provider`:
//! - the [`ApiConfig`] from [`build_config`], a plain value fixed at build time
//! - [`DashboardState`], the reactive signals the panels read and write
//!
//! Child components retrieve them with `use_context::<ApiConfig>()` and
//! `use_context::<DashboardState>()`.

use dioxus::prelude::*;
use owd_api::models::Prediction;
use owd_api::ApiConfig;

/// Service origin for the web build. Set `OWD_API_BASE` when compiling to
/// point the page at another host.
pub fn build_config() -> ApiConfig {
    ApiConfig::from_option(option_env!("OWD_API_BASE"))
}

/// Shared state for the dashboard page.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Whether `mapContainer` is visible
    pub map_visible: Signal<bool>,
    /// Last successful prediction (None until one arrives)
    pub prediction: Signal<Option<Prediction>>,
    /// Whether a prediction request is outstanding
    pub predicting: Signal<bool>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            map_visible: Signal::new(false),
            prediction: Signal::new(None),
            predicting: Signal::new(false),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
