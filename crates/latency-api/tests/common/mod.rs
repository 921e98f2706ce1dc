use latency_api::dataset::{MeasurementRecord, MeasurementTable};

/// Build a single measurement record
pub fn record(region: &str, latency_ms: f64, uptime_pct: f64) -> MeasurementRecord {
    MeasurementRecord {
        region: region.to_string(),
        latency_ms,
        uptime_pct,
    }
}

/// Small fixed table spanning three regions
pub fn sample_table() -> MeasurementTable {
    MeasurementTable::new(vec![
        record("us-east", 100.0, 99.9),
        record("us-east", 200.0, 99.5),
        record("ap-south", 50.0, 100.0),
        record("eu-central", 80.0, 99.99),
        record("eu-central", 120.0, 99.95),
        record("eu-central", 90.0, 99.97),
    ])
}
