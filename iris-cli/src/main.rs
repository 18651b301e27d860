//! Iris CLI
//!
//! Command-line interface for captioning and questioning images through the
//! hosted inference API.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use iris_client::config::{DEFAULT_API_BASE_URL, DEFAULT_UPLOAD_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "iris")]
#[command(about = "Image captioning and visual question answering CLI", long_about = None)]
struct Cli {
    /// API token for the inference service
    #[arg(long, env = "REPLICATE_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Model version to run predictions on
    #[arg(long, env = "IRIS_MODEL_VERSION")]
    model_version: Option<String>,

    /// Inference API base URL
    #[arg(long, env = "IRIS_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// File host images are uploaded to
    #[arg(long, env = "IRIS_UPLOAD_URL", default_value = DEFAULT_UPLOAD_URL)]
    upload_url: String,

    /// Seconds between two status queries
    #[arg(long, env = "IRIS_POLL_INTERVAL", default_value_t = 2)]
    poll_interval: u64,

    /// Give up after this many status queries
    #[arg(long, env = "IRIS_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Give up after this many seconds of polling
    #[arg(long, env = "IRIS_POLL_TIMEOUT")]
    timeout: Option<u64>,

    /// Print raw JSON; failures are printed as {"error": ...} instead of aborting
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iris=warn,iris_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        token: cli.token,
        model_version: cli.model_version,
        api_url: cli.api_url,
        upload_url: cli.upload_url,
        poll_interval: cli.poll_interval,
        max_attempts: cli.max_attempts,
        timeout: cli.timeout,
        json: cli.json,
    };

    handle_command(cli.command, &config).await
}
