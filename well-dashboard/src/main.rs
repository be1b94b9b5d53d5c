//! Oil & Gas Well Dashboard
//!
//! Single-page dashboard over the well analytics service:
//! - yearly oil production trend (line chart)
//! - well counts per state (bar chart)
//! - most / least producing states (two bar charts)
//! - a per-state map, built on first use
//! - a production prediction form
//!
//! Data flow:
//! 1. On mount, the Chart.js/Leaflet bridge is installed and the three chart
//!    panels are fetched concurrently. Each renders on its own; a failed
//!    panel is logged and stays empty.
//! 2. The map and prediction panels stay idle until the user clicks.
//!
//! Set `OWD_API_BASE` at build time to point at a service other than
//! `http://127.0.0.1:5000`.

use dioxus::prelude::*;
use owd_chart_ui::components::{ChartContainer, ChartHeader, MapPanel, PredictionPanel};
use owd_chart_ui::fetch::BrowserFetch;
use owd_chart_ui::js_bridge;
use owd_chart_ui::panels::ChartJsRenderer;
use owd_chart_ui::state::{build_config, DashboardState};
use owd_panels::charts::{load_panel, ChartPanel};
use owd_panels::dom;

/// Mount point for the Dioxus app.
const ROOT_ID: &str = "main";

const SECTION_STYLE: &str = "padding: 12px; background: #1E1E1E; border-radius: 6px; border: 1px solid #333;";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(build_config);
    use_context_provider(DashboardState::new);

    // Load the chart panels once. The effect reads no signals, so it never re-runs.
    use_effect(move || {
        js_bridge::init_bridge();
        log::info!("Loading dashboard panels from {}", config.base_url());

        for panel in ChartPanel::ALL {
            let config = config.clone();
            spawn(async move {
                if !load_panel(&BrowserFetch, &ChartJsRenderer, &config, panel).await {
                    log::warn!("{:?} panel left empty", panel);
                }
            });
        }
    });

    rsx! {
        div {
            style: "padding: 16px; color: #EEE; background: #121212; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 { style: "margin: 0 0 16px 0;", "Oil & Gas Well Dashboard" }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",

                div {
                    style: SECTION_STYLE,
                    ChartHeader {
                        title: "Total Oil Production Over Time".to_string(),
                        unit_description: "Barrels".to_string(),
                    }
                    ChartContainer { id: dom::TREND_CHART.to_string() }
                }

                div {
                    style: SECTION_STYLE,
                    ChartHeader { title: "Wells Per State".to_string() }
                    ChartContainer { id: dom::WELLS_PER_STATE_CHART.to_string() }
                }

                div {
                    style: SECTION_STYLE,
                    ChartHeader {
                        title: "Most Producing States".to_string(),
                        unit_description: "Barrels".to_string(),
                    }
                    ChartContainer { id: dom::MOST_PRODUCING_CHART.to_string() }
                }

                div {
                    style: SECTION_STYLE,
                    ChartHeader {
                        title: "Least Producing States".to_string(),
                        unit_description: "Barrels".to_string(),
                    }
                    ChartContainer { id: dom::LEAST_PRODUCING_CHART.to_string() }
                }
            }

            div {
                style: "{SECTION_STYLE} margin-top: 16px;",
                ChartHeader {
                    title: "Wells by State".to_string(),
                    unit_description: "Average production in millions of barrels per year".to_string(),
                }
                MapPanel {}
            }

            div {
                style: "{SECTION_STYLE} margin-top: 16px;",
                ChartHeader {
                    title: "Predict Well Performance".to_string(),
                    unit_description: "Millions of barrels".to_string(),
                }
                PredictionPanel {}
            }
        }
    }
}
