//! ZinariPay command-line client
//!
//! Calls the ZinariPay API from the terminal and prints responses as JSON.

mod commands;
mod config;

use std::path::PathBuf;

use clap::Parser;
use commands::Command;
use config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use zinari_sdk::ZinariClient;

/// ZinariPay CLI - crypto payment gateway client
#[derive(Parser, Debug)]
#[command(name = "zinari")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./zinari.toml")]
    config: PathBuf,

    /// Override the API base URL
    #[arg(long, env = "ZINARI_BASE_URL")]
    base_url: Option<Url>,

    /// Override the API key
    #[arg(long, env = "ZINARI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let config_loader = ConfigLoader::new(&args.config, args.base_url, args.api_key);
    let client_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!(config = ?client_config, "Configuration loaded");

    let client = ZinariClient::from_config(client_config)?;

    let output = args.command.run(&client).await.map_err(|e| {
        tracing::error!("Request failed: {}", e);
        e
    })?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout only carries the JSON response.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
