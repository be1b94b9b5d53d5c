//! Command implementations for the oil well dashboard CLI.
//!
//! Each subcommand drives the same loader, chart pipeline, map controller or
//! prediction handler as the browser dashboard, with [`console::Console`]
//! standing in for Chart.js, Leaflet and the page.

use clap::Subcommand;
use owd_api::{ApiConfig, Fetch};
use owd_panels::charts::{load_panel, ChartPanel};
use owd_panels::map::{toggle_map, MapController, MapState};
use owd_panels::prediction::{submit_prediction, SubmitOutcome};
use std::cell::RefCell;
use std::io::Write;

pub mod console;

use console::Console;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Total oil production per year
    Trends,

    /// Number of wells in each state
    WellsPerState,

    /// Most and least producing states
    Extremes,

    /// Per-state markers as the dashboard map would place them
    Map,

    /// Request a production prediction for a future year
    Predict {
        /// Year to predict (2024 or later)
        #[arg(short = 'y', long)]
        year: String,

        /// Expected number of wells (must be positive)
        #[arg(short = 'w', long)]
        wells: String,
    },
}

pub async fn run<F>(command: Command, fetch: &F, config: &ApiConfig) -> anyhow::Result<()>
where
    F: Fetch + ?Sized,
{
    run_with(command, fetch, config, &mut Console::stdio()).await
}

/// [`run`] with an explicit console, so output can be captured.
pub async fn run_with<F, W, E>(
    command: Command,
    fetch: &F,
    config: &ApiConfig,
    console: &mut Console<W, E>,
) -> anyhow::Result<()>
where
    F: Fetch + ?Sized,
    W: Write,
    E: Write,
{
    match command {
        Command::Trends => chart(fetch, config, console, ChartPanel::Trend).await,
        Command::WellsPerState => chart(fetch, config, console, ChartPanel::WellsPerState).await,
        Command::Extremes => chart(fetch, config, console, ChartPanel::Extremes).await,
        Command::Map => map(fetch, config, console).await,
        Command::Predict { year, wells } => predict(fetch, config, console, &year, &wells).await,
    }
}

async fn chart<F, W, E>(
    fetch: &F,
    config: &ApiConfig,
    console: &Console<W, E>,
    panel: ChartPanel,
) -> anyhow::Result<()>
where
    F: Fetch + ?Sized,
    W: Write,
    E: Write,
{
    if !load_panel(fetch, console, config, panel).await {
        anyhow::bail!(
            "{:?} panel could not be loaded from {}",
            panel,
            config.url(panel.endpoint())
        );
    }
    Ok(())
}

async fn map<F, W, E>(fetch: &F, config: &ApiConfig, console: &mut Console<W, E>) -> anyhow::Result<()>
where
    F: Fetch + ?Sized,
    W: Write,
    E: Write,
{
    let controller = RefCell::new(MapController::new(console));
    let state = toggle_map(&controller, fetch, config).await;
    if state != MapState::VisibleInitialized {
        anyhow::bail!("map data could not be loaded from {}", config.base_url());
    }
    log::info!("Placed {} markers", controller.borrow().backend().markers());
    Ok(())
}

async fn predict<F, W, E>(
    fetch: &F,
    config: &ApiConfig,
    console: &Console<W, E>,
    year: &str,
    wells: &str,
) -> anyhow::Result<()>
where
    F: Fetch + ?Sized,
    W: Write,
    E: Write,
{
    match submit_prediction(fetch, console, config, year, wells).await {
        SubmitOutcome::Displayed(_) => Ok(()),
        SubmitOutcome::Invalid => anyhow::bail!("invalid prediction input"),
        SubmitOutcome::Rejected(error) => anyhow::bail!("prediction rejected: {}", error),
        SubmitOutcome::Failed => anyhow::bail!("prediction request failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owd_api::testing::ScriptedFetch;
    use owd_api::Endpoint;

    fn console() -> Console<Vec<u8>, Vec<u8>> {
        Console::new(Vec::new(), Vec::new())
    }

    #[tokio::test]
    async fn wells_per_state_prints_each_state() {
        let config = ApiConfig::default();
        let fetch = ScriptedFetch::new();
        fetch.respond(
            &config.url(Endpoint::WellsPerState),
            200,
            r#"[{"state": "TX", "total_wells": 900}, {"state": "ND", "total_wells": 40}]"#,
        );
        let mut console = console();

        run_with(Command::WellsPerState, &fetch, &config, &mut console)
            .await
            .unwrap();

        let out = String::from_utf8(console.into_parts().0).unwrap();
        assert!(out.contains("TX  900"));
        assert!(out.contains("ND  40"));
    }

    #[tokio::test]
    async fn failed_panel_is_an_error() {
        let config = ApiConfig::default();
        let fetch = ScriptedFetch::new();
        fetch.respond(&config.url(Endpoint::Trends), 500, "");

        let result = run_with(Command::Trends, &fetch, &config, &mut console()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn map_places_markers() {
        let config = ApiConfig::default();
        let fetch = ScriptedFetch::new();
        fetch.respond(
            &config.url(Endpoint::MapData),
            200,
            r#"[
                {"state": "TX", "lat": 31.0, "lon": -99.0, "total_wells": 10, "avg_production": 1.5},
                {"state": "AK", "lat": null, "lon": -150.0, "total_wells": 3, "avg_production": 1.0}
            ]"#,
        );
        let mut console = console();

        run_with(Command::Map, &fetch, &config, &mut console)
            .await
            .unwrap();

        assert_eq!(console.markers(), 1);
    }

    #[tokio::test]
    async fn invalid_prediction_is_an_error_without_request() {
        let config = ApiConfig::default();
        let fetch = ScriptedFetch::new();
        let command = Command::Predict {
            year: "2023".to_string(),
            wells: "10".to_string(),
        };

        let result = run_with(command, &fetch, &config, &mut console()).await;

        assert!(result.is_err());
        assert!(fetch.calls().is_empty());
    }
}
