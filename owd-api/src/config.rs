//! Service origin and endpoint table.

/// Origin the dashboard talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Every endpoint exposed by the analytics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET` yearly oil production totals.
    Trends,
    /// `GET` well counts aggregated per state.
    WellsPerState,
    /// `GET` top and bottom producing states.
    MostLeastProducing,
    /// `GET` per-state coordinates and aggregates for the map.
    MapData,
    /// `POST` model prediction for a future year.
    PredictWellPerformance,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Trends => "/api/trends",
            Endpoint::WellsPerState => "/api/wells-per-state",
            Endpoint::MostLeastProducing => "/api/most-least-producing",
            Endpoint::MapData => "/api/map-data",
            Endpoint::PredictWellPerformance => "/api/predict-well-performance",
        }
    }
}

/// Connection settings for the analytics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for the given origin. A trailing `/` is dropped so
    /// endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Use `base_url` if present and non-blank, otherwise the default origin.
    pub fn from_option(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url(Endpoint::Trends),
            "http://127.0.0.1:5000/api/trends"
        );
        assert_eq!(
            config.url(Endpoint::PredictWellPerformance),
            "http://127.0.0.1:5000/api/predict-well-performance"
        );
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::new("https://wells.example.com//");
        assert_eq!(config.base_url(), "https://wells.example.com");
        assert_eq!(
            config.url(Endpoint::MapData),
            "https://wells.example.com/api/map-data"
        );
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_option(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_option(None), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_option(Some("http://10.0.0.2:8080")).base_url(),
            "http://10.0.0.2:8080"
        );
    }
}
