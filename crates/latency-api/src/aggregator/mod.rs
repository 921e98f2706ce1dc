pub mod stats;

pub use stats::RegionStats;

use crate::dataset::MeasurementTable;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-region report keyed by region identifier
pub type RegionStatMap = BTreeMap<String, RegionStats>;

/// Compute latency and uptime statistics for each requested region.
///
/// Regions with no matching records are omitted from the result. Duplicate
/// identifiers in `regions` produce a single entry with the same values as a
/// single occurrence. Never fails: an empty request or an empty table yields
/// an empty map.
pub fn compute(table: &MeasurementTable, regions: &[String], threshold_ms: i64) -> RegionStatMap {
    let mut results = BTreeMap::new();

    for region in regions {
        if results.contains_key(region) {
            continue;
        }

        let records: Vec<_> = table.region_records(region).collect();
        if let Some(stats) = RegionStats::from_records(&records, threshold_ms) {
            results.insert(region.clone(), stats);
        }
    }

    debug!(
        requested = regions.len(),
        matched = results.len(),
        threshold_ms,
        "computed region statistics"
    );

    results
}
