//! Element ids the dashboard page exposes.

pub const TREND_CHART: &str = "trendChart";
pub const WELLS_PER_STATE_CHART: &str = "wellsPerStateChart";
pub const MOST_PRODUCING_CHART: &str = "mostProducingChart";
pub const LEAST_PRODUCING_CHART: &str = "leastProducingChart";

pub const TOGGLE_MAP_BUTTON: &str = "toggleMapBtn";
pub const MAP_CONTAINER: &str = "mapContainer";
/// Leaflet renders into this element, nested inside [`MAP_CONTAINER`].
pub const MAP: &str = "map";

pub const PREDICTION_FORM: &str = "predictionForm";
pub const YEAR_INPUT: &str = "yearInput";
pub const WELLS_INPUT: &str = "wellsInput";
pub const PREDICTION_RESULTS: &str = "predictionResults";
