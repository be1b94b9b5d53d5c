//! Lazy map controller.
//!
//! The map is expensive (tile layer plus one marker per state), so nothing is
//! built until the user first shows it. After a successful build, toggles only
//! flip visibility; the map and its markers live for the rest of the session.
//!
//! ```text
//!   Hidden ──toggle──▶ VisibleUninitialized ──init ok──▶ VisibleInitialized
//!     ▲                      │ init failed                    │
//!     │                      ▼ (retried on next show)         │
//!     └──────────────toggle──┴──────────────────toggle────────┘
//! ```
//!
//! [`MapController`] holds the state; [`toggle_map`] drives one click,
//! including the network round-trip when initialization is due.

use owd_api::loader::load;
use owd_api::models::MapStateEntry;
use owd_api::{ApiConfig, Endpoint, Fetch};
use serde_json::Value;
use std::cell::RefCell;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

/// Initial view: continental United States.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 37.8,
    lon: -96.0,
};
pub const DEFAULT_ZOOM: u8 = 4;

/// Raster tile layer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    pub url_template: &'static str,
    pub max_zoom: u8,
    pub attribution: &'static str,
}

pub const OSM_TILES: TileSource = TileSource {
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    max_zoom: 10,
    attribution: "© OpenStreetMap contributors",
};

/// The map library, as seen by the controller.
pub trait MapBackend {
    /// Show or hide the map container.
    fn set_visible(&mut self, visible: bool);
    /// Create the map view and attach its tile layer.
    fn create_map(&mut self, center: LatLng, zoom: u8, tiles: &TileSource);
    /// Place a marker for `entry`. The backend decides how the entry's
    /// figures are presented (see [`popup_html`] for the browser popup).
    fn add_marker(&mut self, position: LatLng, entry: &MapStateEntry);
}

impl<B: MapBackend + ?Sized> MapBackend for &mut B {
    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn create_map(&mut self, center: LatLng, zoom: u8, tiles: &TileSource) {
        (**self).create_map(center, zoom, tiles);
    }

    fn add_marker(&mut self, position: LatLng, entry: &MapStateEntry) {
        (**self).add_marker(position, entry);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Hidden,
    VisibleUninitialized,
    VisibleInitialized,
}

/// What a toggle asks of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Hidden,
    Shown,
    /// Shown, and the caller must now fetch map data and call
    /// [`MapController::initialize`] or [`MapController::abandon_initialization`].
    ShownNeedsInit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapInitError {
    #[error("map data is empty")]
    Empty,
    #[error("map data is not a sequence")]
    NotASequence,
}

/// Owns the map backend plus the once-per-session initialization flag.
pub struct MapController<B> {
    backend: B,
    visible: bool,
    initialized: bool,
    initializing: bool,
}

impl<B: MapBackend> MapController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            visible: false,
            initialized: false,
            initializing: false,
        }
    }

    pub fn state(&self) -> MapState {
        match (self.visible, self.initialized) {
            (false, _) => MapState::Hidden,
            (true, false) => MapState::VisibleUninitialized,
            (true, true) => MapState::VisibleInitialized,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Flip container visibility.
    ///
    /// Requests initialization only when becoming visible, never built, and
    /// no initialization is already in flight.
    pub fn toggle(&mut self) -> Toggle {
        self.visible = !self.visible;
        self.backend.set_visible(self.visible);

        if !self.visible {
            return Toggle::Hidden;
        }
        if self.initialized || self.initializing {
            return Toggle::Shown;
        }
        self.initializing = true;
        Toggle::ShownNeedsInit
    }

    /// Build the map from a `/api/map-data` payload.
    ///
    /// An empty or non-array payload leaves the controller uninitialized so
    /// the next show retries. Entries without usable coordinates, or that do
    /// not parse, are skipped. Returns the number of markers placed.
    pub fn initialize(&mut self, payload: Value) -> Result<usize, MapInitError> {
        self.initializing = false;
        if self.initialized {
            return Ok(0);
        }

        let items = match payload {
            Value::Array(items) if items.is_empty() => return Err(MapInitError::Empty),
            Value::Array(items) => items,
            _ => return Err(MapInitError::NotASequence),
        };

        self.backend.create_map(DEFAULT_CENTER, DEFAULT_ZOOM, &OSM_TILES);

        let mut placed = 0;
        for item in items {
            let entry: MapStateEntry = match serde_json::from_value(item) {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping malformed map entry: {}", e);
                    continue;
                }
            };
            let Some((lat, lon)) = entry.coordinates() else {
                log::warn!("Missing coordinates for {}", entry.state);
                continue;
            };
            self.backend.add_marker(LatLng { lat, lon }, &entry);
            placed += 1;
        }

        self.initialized = true;
        log::info!("Map initialized with {} markers", placed);
        Ok(placed)
    }

    /// The map-data request failed; allow a later show to try again.
    pub fn abandon_initialization(&mut self) {
        self.initializing = false;
    }
}

/// Popup body for one state's marker.
pub fn popup_html(entry: &MapStateEntry) -> String {
    format!(
        "<b>{}</b><br>Total Wells: {}<br>Avg Millions of Barrels/Year: {}",
        escape_html(&entry.state),
        entry.total_wells,
        entry.avg_production
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Handle one click of the map toggle button.
///
/// The `RefCell` borrow is released before the map-data request is awaited,
/// so other handlers can run while it is pending.
pub async fn toggle_map<B, F>(
    controller: &RefCell<MapController<B>>,
    fetch: &F,
    config: &ApiConfig,
) -> MapState
where
    B: MapBackend,
    F: Fetch + ?Sized,
{
    let toggle = controller.borrow_mut().toggle();

    if toggle == Toggle::ShownNeedsInit {
        let url = config.url(Endpoint::MapData);
        let mut payload = None;
        load(fetch, &url, |value: Value| payload = Some(value)).await;

        let mut controller = controller.borrow_mut();
        match payload {
            Some(value) => {
                if let Err(e) = controller.initialize(value) {
                    log::error!("Invalid API response format or empty data: {}", e);
                }
            }
            None => controller.abandon_initialization(),
        }
    }

    controller.borrow().state()
}
