use crate::dataset::{DatasetFormat, MeasurementRecord, MeasurementTable};
use anyhow::{Context, Result, bail, ensure};
use std::{fs::File, io::BufReader, path::Path};
use tracing::info;

/// Load the measurement table from disk. This happens once per process
/// lifetime; the table is read-only afterwards.
pub fn load(path: &Path, format: DatasetFormat) -> Result<MeasurementTable> {
    let format = resolve_format(path, format)?;

    let records = match format {
        DatasetFormat::Json => read_json(path)?,
        DatasetFormat::Csv => read_csv(path)?,
        DatasetFormat::Auto => unreachable!("resolve_format returns a concrete format"),
    };

    validate_records(path, &records)?;

    info!(
        path = %path.display(),
        %format,
        records = records.len(),
        "loaded measurement dataset"
    );

    Ok(MeasurementTable::new(records))
}

fn resolve_format(path: &Path, format: DatasetFormat) -> Result<DatasetFormat> {
    if format != DatasetFormat::Auto {
        return Ok(format);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(DatasetFormat::Json),
        Some("csv") => Ok(DatasetFormat::Csv),
        Some(other) => bail!(
            "cannot infer dataset format from extension '{other}' of {}",
            path.display()
        ),
        None => bail!(
            "cannot infer dataset format: {} has no file extension",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open dataset file {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse JSON dataset {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset file {}", path.display()))?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: MeasurementRecord =
            result.with_context(|| format!("failed to parse row {row} of {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

fn validate_records(path: &Path, records: &[MeasurementRecord]) -> Result<()> {
    for (row, record) in records.iter().enumerate() {
        ensure!(
            record.latency_ms.is_finite() && record.uptime_pct.is_finite(),
            "record {row} of {} has non-finite values (region '{}')",
            path.display(),
            record.region
        );
    }

    Ok(())
}
