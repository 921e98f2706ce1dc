pub mod validation;

use crate::dataset::DatasetFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};
use validation::validate_config;

/// Main settings configuration for latency-api
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level for application logging (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Measurement dataset configuration
    pub dataset: DatasetSettings,
    /// Prometheus exporter configuration (optional)
    #[serde(default)]
    pub metrics: Option<MetricsSettings>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to
    pub listen: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
        }
    }
}

/// Measurement dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Path to the measurement dataset file
    pub path: String,
    /// Dataset file format; inferred from the file extension by default
    #[serde(default)]
    pub format: DatasetFormat,
}

/// Prometheus exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSettings {
    /// Socket address the exporter binds to
    pub addr: SocketAddr,
}

impl Settings {
    /// Load configuration from a specific config file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Construct settings, env vars take priority still
        let settings = ConfigBuilder::builder()
            .add_source(File::with_name(&path.as_ref().to_string_lossy()))
            .add_source(
                Environment::with_prefix("LA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Validate the configuration
        validate_config(&settings)?;

        Ok(settings)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        // NOTE: It's ok if this fails (file might not exist)
        let _ = dotenvy::dotenv();

        // Construct settings
        let settings: Settings = ConfigBuilder::builder()
            .add_source(
                Environment::with_prefix("LA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Validate the configuration
        validate_config(&settings)?;

        Ok(settings)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{\n\
             \tLog Level: {}\n\
             \tListen: {}\n\
             \tDataset Path: {}\n\
             \tDataset Format: {}\n\
             \tMetrics: {}\n\
             }}",
            self.log_level,
            self.server.listen,
            self.dataset.path,
            self.dataset.format,
            self.metrics
                .as_ref()
                .map(|m| m.addr.to_string())
                .unwrap_or_else(|| "disabled".to_string()),
        )
    }
}
