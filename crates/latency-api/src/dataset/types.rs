use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single network measurement observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Region identifier (e.g., a cloud region code)
    pub region: String,
    /// Latency observation in milliseconds
    pub latency_ms: f64,
    /// Uptime percentage observation
    pub uptime_pct: f64,
}

/// Immutable table of measurement records, built once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    records: Vec<MeasurementRecord>,
}

impl MeasurementTable {
    pub fn new(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Iterate over the records belonging to one region
    pub fn region_records<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = &'a MeasurementRecord> + 'a {
        self.records.iter().filter(move |r| r.region == region)
    }

    /// Distinct region identifiers present in the table, sorted
    pub fn region_codes(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .unique()
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, latency_ms: f64) -> MeasurementRecord {
        MeasurementRecord {
            region: region.to_string(),
            latency_ms,
            uptime_pct: 99.0,
        }
    }

    #[test]
    fn test_region_records_filters() {
        let table = MeasurementTable::new(vec![
            record("fra", 10.0),
            record("nyc", 20.0),
            record("fra", 30.0),
        ]);

        let latencies: Vec<f64> = table.region_records("fra").map(|r| r.latency_ms).collect();
        assert_eq!(latencies, vec![10.0, 30.0]);
        assert_eq!(table.region_records("sin").count(), 0);
    }

    #[test]
    fn test_region_codes_distinct_sorted() {
        let table = MeasurementTable::new(vec![
            record("nyc", 10.0),
            record("fra", 20.0),
            record("nyc", 30.0),
        ]);

        assert_eq!(table.region_codes(), vec!["fra", "nyc"]);
    }
}
