pub mod error;
pub mod server;

pub use error::ApiError;

use serde::{Deserialize, Serialize};

/// Decoded request body for the report endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyRequest {
    /// Region identifiers to report on; may be empty, contain duplicates, or
    /// name regions absent from the dataset
    pub regions: Vec<String>,
    /// Breach threshold in milliseconds
    pub threshold_ms: i64,
}
