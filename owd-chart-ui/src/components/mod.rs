//! Reusable Dioxus RSX components for the dashboard page.

mod chart_container;
mod chart_header;
mod loading_spinner;
mod map_panel;
mod prediction_panel;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use loading_spinner::LoadingSpinner;
pub use map_panel::MapPanel;
pub use prediction_panel::PredictionPanel;
