//! Chart pipeline: payload → declarative chart description → renderer.
//!
//! [`ChartSpec`] serializes to a Chart.js configuration object
//! (`{"type": ..., "data": {"labels": ..., "datasets": ...}, "options": ...}`),
//! which the browser bridge passes straight to `new Chart(...)`.
//! Every builder keeps the order the service sent; nothing is sorted here.

use crate::dom;
use owd_api::loader::load;
use owd_api::models::{ProducingExtremes, StateValue, StateWellCount, TrendPoint};
use owd_api::{ApiConfig, Endpoint, Fetch};
use serde::Serialize;

const TREND_LINE_COLOR: &str = "#FFD700";
const TREND_FILL_COLOR: &str = "rgba(255, 215, 0, 0.2)";
const TREND_POINT_COLOR: &str = "#FFFFFF";
const WELLS_BAR_COLOR: &str = "#00FF7F";
const WELLS_BORDER_COLOR: &str = "#FFFFFF";
const MOST_PRODUCING_COLOR: &str = "#FF4500";
const LEAST_PRODUCING_COLOR: &str = "#FF6347";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One series in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
            point_background_color: None,
            point_border_color: None,
            point_radius: None,
            border_width: None,
            fill: None,
        }
    }

    pub fn border_color(mut self, color: &str) -> Self {
        self.border_color = Some(color.to_string());
        self
    }

    pub fn background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    pub fn points(mut self, background: &str, border: &str, radius: u32) -> Self {
        self.point_background_color = Some(background.to_string());
        self.point_border_color = Some(border.to_string());
        self.point_radius = Some(radius);
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
}

/// Declarative description of a single chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, labels: Vec<String>, dataset: Dataset) -> Self {
        Self {
            kind,
            data: ChartData {
                labels,
                datasets: vec![dataset],
            },
            options: ChartOptions { responsive: true },
        }
    }

    /// Chart.js configuration as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Something that can draw a [`ChartSpec`] into a target element.
///
/// Rendering is terminal: drawing into a target that already holds a chart
/// replaces or overlaps it.
pub trait ChartRenderer {
    fn render(&self, target: &str, spec: &ChartSpec);
}

/// Line chart of yearly production, x-axis in received order.
pub fn trend_chart(points: &[TrendPoint]) -> ChartSpec {
    let labels = points.iter().map(|p| p.year.to_string()).collect();
    let values = points.iter().map(|p| p.total_oil_production).collect();
    ChartSpec::new(
        ChartKind::Line,
        labels,
        Dataset::new("Total Oil Production (Barrels)", values)
            .border_color(TREND_LINE_COLOR)
            .background_color(TREND_FILL_COLOR)
            .points(TREND_POINT_COLOR, TREND_LINE_COLOR, 4)
            .filled(),
    )
}

/// One bar per state, in received order.
pub fn wells_per_state_chart(counts: &[StateWellCount]) -> ChartSpec {
    let labels = counts.iter().map(|c| c.state.clone()).collect();
    let values = counts.iter().map(|c| c.total_wells as f64).collect();
    ChartSpec::new(
        ChartKind::Bar,
        labels,
        Dataset::new("Total Wells", values)
            .background_color(WELLS_BAR_COLOR)
            .border_color(WELLS_BORDER_COLOR)
            .border_width(1),
    )
}

fn pairs_chart(pairs: &[StateValue], label: &str, color: &str) -> ChartSpec {
    let labels = pairs.iter().map(|p| p.state().to_string()).collect();
    let values = pairs.iter().map(StateValue::value).collect();
    ChartSpec::new(
        ChartKind::Bar,
        labels,
        Dataset::new(label, values).background_color(color),
    )
}

/// `(most producing, least producing)` bar charts.
pub fn extremes_charts(extremes: &ProducingExtremes) -> (ChartSpec, ChartSpec) {
    (
        pairs_chart(
            &extremes.most_producing,
            "Most Producing (Barrels)",
            MOST_PRODUCING_COLOR,
        ),
        pairs_chart(
            &extremes.least_producing,
            "Least Producing (Barrels)",
            LEAST_PRODUCING_COLOR,
        ),
    )
}

/// The three chart panels loaded on page ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPanel {
    Trend,
    WellsPerState,
    Extremes,
}

impl ChartPanel {
    pub const ALL: [ChartPanel; 3] = [
        ChartPanel::Trend,
        ChartPanel::WellsPerState,
        ChartPanel::Extremes,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            ChartPanel::Trend => Endpoint::Trends,
            ChartPanel::WellsPerState => Endpoint::WellsPerState,
            ChartPanel::Extremes => Endpoint::MostLeastProducing,
        }
    }

    /// Element ids the panel draws into.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            ChartPanel::Trend => &[dom::TREND_CHART],
            ChartPanel::WellsPerState => &[dom::WELLS_PER_STATE_CHART],
            ChartPanel::Extremes => &[dom::MOST_PRODUCING_CHART, dom::LEAST_PRODUCING_CHART],
        }
    }
}

/// Fetch one panel's payload and render it.
///
/// Failures are logged by the loader and leave the panel empty. Returns
/// whether anything was rendered.
pub async fn load_panel<F, R>(fetch: &F, renderer: &R, config: &ApiConfig, panel: ChartPanel) -> bool
where
    F: Fetch + ?Sized,
    R: ChartRenderer + ?Sized,
{
    let url = config.url(panel.endpoint());
    match panel {
        ChartPanel::Trend => {
            load(fetch, &url, |points: Vec<TrendPoint>| {
                renderer.render(dom::TREND_CHART, &trend_chart(&points));
            })
            .await
        }
        ChartPanel::WellsPerState => {
            load(fetch, &url, |counts: Vec<StateWellCount>| {
                renderer.render(dom::WELLS_PER_STATE_CHART, &wells_per_state_chart(&counts));
            })
            .await
        }
        ChartPanel::Extremes => {
            load(fetch, &url, |extremes: ProducingExtremes| {
                let (most, least) = extremes_charts(&extremes);
                renderer.render(dom::MOST_PRODUCING_CHART, &most);
                renderer.render(dom::LEAST_PRODUCING_CHART, &least);
            })
            .await
        }
    }
}
