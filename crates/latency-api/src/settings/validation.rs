use crate::settings::Settings;
use anyhow::{Result, bail};

/// Validate the configuration values
pub fn validate_config(settings: &Settings) -> Result<()> {
    // Validate log level
    let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&settings.log_level.to_lowercase().as_str()) {
        bail!(
            "Invalid log level '{}'. Valid options are: {:?}",
            settings.log_level,
            valid_log_levels
        );
    }

    // Validate dataset settings
    if settings.dataset.path.is_empty() {
        bail!("Dataset path cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dataset::DatasetFormat,
        settings::{DatasetSettings, ServerSettings},
    };

    fn settings() -> Settings {
        Settings {
            log_level: "info".to_string(),
            server: ServerSettings::default(),
            dataset: DatasetSettings {
                path: "data/sample-measurements.json".to_string(),
                format: DatasetFormat::Auto,
            },
            metrics: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&settings()).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = settings();
        settings.log_level = "verbose".to_string();
        assert!(validate_config(&settings).is_err());
    }

    #[test]
    fn test_empty_dataset_path() {
        let mut settings = settings();
        settings.dataset.path = String::new();
        assert!(validate_config(&settings).is_err());
    }

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.listen.to_string(), "127.0.0.1:8080");
    }
}
