//! OWD CLI - Command line tool for querying the oil well analytics service.

use clap::Parser;
use owd_api::config::DEFAULT_BASE_URL;
use owd_api::fetch::HttpFetch;
use owd_api::ApiConfig;

#[derive(Parser)]
#[command(
    name = "owd-cli",
    version,
    about = "Oil & gas well analytics toolkit"
)]
struct Cli {
    /// Origin of the analytics service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: owd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::new(cli.base_url);
    log::debug!("Using analytics service at {}", config.base_url());
    owd_cmd::run(cli.command, &HttpFetch::new(), &config).await
}
