//! Payload types for the analytics service.
//!
//! Read-side structs derive `Deserialize` for the loader and `Serialize` so
//! the CLI and tests can echo them back as JSON.

use crate::numeric;
use serde::{Deserialize, Serialize};

/// Total oil production for one reporting year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(deserialize_with = "numeric::year")]
    pub year: i32,
    /// Barrels produced across all states that year.
    #[serde(deserialize_with = "numeric::number")]
    pub total_oil_production: f64,
}

/// Number of wells in one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateWellCount {
    pub state: String,
    #[serde(deserialize_with = "numeric::integer")]
    pub total_wells: i64,
}

/// A `[state, value]` pair as emitted by the extremes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateValue(
    pub String,
    #[serde(deserialize_with = "numeric::number")] pub f64,
);

impl StateValue {
    pub fn state(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Top and bottom producing states, already ordered by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducingExtremes {
    pub most_producing: Vec<StateValue>,
    pub least_producing: Vec<StateValue>,
}

/// Per-state aggregates used to place map markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStateEntry {
    pub state: String,
    #[serde(default, deserialize_with = "numeric::optional_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional_number")]
    pub lon: Option<f64>,
    #[serde(deserialize_with = "numeric::integer")]
    pub total_wells: i64,
    /// Average annual production in millions of barrels.
    #[serde(deserialize_with = "numeric::number")]
    pub avg_production: f64,
}

impl MapStateEntry {
    /// `(lat, lon)` when both are present and non-zero. A zero coordinate
    /// counts as missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let usable = |c: Option<f64>| c.filter(|v| *v != 0.0 && v.is_finite());
        Some((usable(self.lat)?, usable(self.lon)?))
    }
}

/// Body of `POST /api/predict-well-performance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: i32,
    pub total_wells: i64,
}

/// A successful model prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(deserialize_with = "numeric::year")]
    pub year: i32,
    #[serde(deserialize_with = "numeric::integer")]
    pub total_wells: i64,
    /// Millions of barrels.
    #[serde(deserialize_with = "numeric::number")]
    pub predicted_oil_production: f64,
    /// Millions of barrels.
    #[serde(deserialize_with = "numeric::number")]
    pub predicted_gas_production: f64,
}

/// Either a prediction or a server-reported error; never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Rejected { error: String },
    Predicted(Prediction),
}
