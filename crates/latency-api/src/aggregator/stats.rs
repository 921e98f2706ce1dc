use crate::dataset::MeasurementRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Statistics calculated from one region's measurement records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionStats {
    /// Calculate statistics from a region's records at the given breach
    /// threshold. Returns `None` when `records` is empty.
    ///
    /// A breach is a record whose `latency_ms` strictly exceeds
    /// `threshold_ms`; records equal to the threshold do not count.
    pub fn from_records(records: &[&MeasurementRecord], threshold_ms: i64) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        // Sort latencies for the percentile calculation
        let mut latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
        latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = latencies.len();
        let avg_latency = latencies.iter().sum::<f64>() / count as f64;
        let p95_latency = percentile(&latencies, 0.95);
        let avg_uptime = records.iter().map(|r| r.uptime_pct).sum::<f64>() / count as f64;

        let threshold = threshold_ms as f64;
        let breaches = records.iter().filter(|r| r.latency_ms > threshold).count() as u64;

        Some(RegionStats {
            avg_latency,
            p95_latency,
            avg_uptime,
            breaches,
        })
    }
}

/// Percentile of a sorted, non-empty sample using linear interpolation
/// between the two nearest ranks: the fraction `q` maps to rank `q * (n - 1)`,
/// interpolating between the floor and ceil ranks.
pub fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        return sorted[lower];
    }

    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}
