pub mod loader;
pub mod types;

pub use types::{MeasurementRecord, MeasurementTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dataset file format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Infer the format from the file extension
    #[default]
    Auto,
    Json,
    Csv,
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
