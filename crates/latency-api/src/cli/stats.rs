use crate::cli::common::{Exportable, OutputFormat, OutputOptions, collection_to_csv, to_json_string};
use anyhow::Result;
use clap::Args;
use latency_api::{
    aggregator::{self, RegionStats},
    dataset::loader,
    settings::Settings,
};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

/// Offline per-region report over the configured dataset
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Breach threshold in milliseconds
    #[arg(short = 't', long, default_value_t = 200)]
    pub threshold_ms: i64,

    /// Regions to report on (defaults to every region in the dataset)
    #[arg(short = 'r', long, value_delimiter = ',', value_name = "REGION")]
    pub regions: Vec<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RegionStatsRow {
    pub region: String,
    #[tabled(display = "display_ms", rename = "avg_latency(ms)")]
    pub avg_latency: f64,
    #[tabled(display = "display_ms", rename = "p95_latency(ms)")]
    pub p95_latency: f64,
    #[tabled(display = "display_pct", rename = "avg_uptime(%)")]
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionStatsRow {
    fn new(region: &str, stats: &RegionStats) -> Self {
        Self {
            region: region.to_string(),
            avg_latency: stats.avg_latency,
            p95_latency: stats.p95_latency,
            avg_uptime: stats.avg_uptime,
            breaches: stats.breaches,
        }
    }
}

fn display_ms(value: &f64) -> String {
    format!("{value:.3}")
}

fn display_pct(value: &f64) -> String {
    format!("{value:.2}")
}

impl Exportable for Vec<RegionStatsRow> {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => collection_to_csv(self),
            OutputFormat::Json => to_json_string(self, false),
            OutputFormat::JsonPretty => to_json_string(self, true),
        }
    }
}

pub fn handle(settings: &Settings, args: StatsArgs) -> Result<()> {
    let table = loader::load(Path::new(&settings.dataset.path), settings.dataset.format)?;

    let regions: Vec<String> = if args.regions.is_empty() {
        table.region_codes().iter().map(|r| r.to_string()).collect()
    } else {
        args.regions.clone()
    };

    let report = aggregator::compute(&table, &regions, args.threshold_ms);
    let rows: Vec<RegionStatsRow> = report
        .iter()
        .map(|(region, stats)| RegionStatsRow::new(region, stats))
        .collect();

    if args.output.has_target() {
        args.output.write(&rows, "region-stats")?;
    } else {
        println!(
            "{}",
            Table::new(&rows).with(Style::psql().remove_horizontals())
        );
    }

    Ok(())
}
