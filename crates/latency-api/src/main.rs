mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use latency_api::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "latency-api",
    about = "Regional latency and uptime statistics over network measurement data",
    version,
    after_help = r#"Configuration:
    Configuration can be provided via:
    1. Environment variables with LA__ prefix (e.g., LA__DATASET__PATH)
    2. .env file in the current directory (see .env.example)
    3. Config file with -c option (see example.config.toml)

Examples:
    # Run the HTTP service
    latency-api -c example.config.toml serve

    # Per-region report for the whole dataset at a 200ms threshold
    latency-api -c example.config.toml stats

    # Report for selected regions, exported as CSV
    latency-api -c example.config.toml stats -r us-east,eu-west -t 150 \
        --output-format csv --output-file report.csv"#
)]
pub struct Cli {
    /// Path to the configuration file (TOML format)
    ///
    /// If not provided, will attempt to load from environment variables
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve,
    /// Compute the per-region report offline
    Stats(cli::stats::StatsArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = if let Some(config_path) = &self.config {
            Settings::from_path(config_path)?
        } else {
            Settings::from_env()?
        };
        init_logging(&settings.log_level)?;

        match self.command {
            Commands::Serve => cli::serve::handle(&settings).await,
            Commands::Stats(args) => cli::stats::handle(&settings, args),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}

fn init_logging(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
