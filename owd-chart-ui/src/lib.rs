//! Shared Dioxus components and Chart.js/Leaflet bridge for the oil well dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js and Leaflet calls via `js_sys::eval()`
//! - `fetch`: `window.fetch` transport for the panel loaders
//! - `panels`: browser implementations of the chart, map and prediction seams
//! - `state`: Reactive DashboardState with Dioxus Signals, plus the build-time ApiConfig
//! - `components`: Reusable RSX components (chart canvases, map panel, prediction form)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod panels;
pub mod state;
