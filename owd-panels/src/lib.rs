//! Panel orchestration for the oil well dashboard.
//!
//! Everything here is independent of the browser: the chart library, the map
//! library and the user-facing alert/results area are reached through the
//! [`charts::ChartRenderer`], [`map::MapBackend`] and
//! [`prediction::PredictionView`] traits, so the same logic drives the Dioxus
//! app and the CLI.

pub mod charts;
pub mod dom;
pub mod map;
pub mod prediction;
