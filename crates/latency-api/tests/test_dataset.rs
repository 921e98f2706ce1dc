use latency_api::dataset::{DatasetFormat, loader};
use std::{fs, path::PathBuf};
use tempfile::tempdir;

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const JSON_FIXTURE: &str = r#"[
    {"region": "us-east", "latency_ms": 100.0, "uptime_pct": 99.9},
    {"region": "us-east", "latency_ms": 200.0, "uptime_pct": 99.5},
    {"region": "ap-south", "latency_ms": 50.5, "uptime_pct": 100.0}
]"#;

const CSV_FIXTURE: &str = "region,latency_ms,uptime_pct\n\
us-east,100.0,99.9\n\
ap-south,50.5,100.0\n";

#[test]
fn test_load_json_by_extension() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "measurements.json", JSON_FIXTURE);

    let table = loader::load(&path, DatasetFormat::Auto).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.region_codes(), vec!["ap-south", "us-east"]);
    assert_eq!(table.region_records("us-east").count(), 2);
}

#[test]
fn test_load_csv_by_extension() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "measurements.csv", CSV_FIXTURE);

    let table = loader::load(&path, DatasetFormat::Auto).unwrap();
    assert_eq!(table.len(), 2);
    let record = table.region_records("ap-south").next().unwrap();
    assert_eq!(record.latency_ms, 50.5);
    assert_eq!(record.uptime_pct, 100.0);
}

#[test]
fn test_load_with_explicit_format_ignores_extension() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "measurements.dat", JSON_FIXTURE);

    let table = loader::load(&path, DatasetFormat::Json).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_load_unknown_extension_fails() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "measurements.dat", JSON_FIXTURE);

    assert!(loader::load(&path, DatasetFormat::Auto).is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(loader::load(&path, DatasetFormat::Auto).is_err());
}

#[test]
fn test_load_malformed_json_fails() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "broken.json", "[{\"region\": ");

    assert!(loader::load(&path, DatasetFormat::Auto).is_err());
}

#[test]
fn test_load_wrong_json_shape_fails() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "wrong.json",
        r#"[{"region": "fra", "latency_ms": "slow", "uptime_pct": 99.0}]"#,
    );

    assert!(loader::load(&path, DatasetFormat::Auto).is_err());
}

#[test]
fn test_load_rejects_non_finite_values() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "nan.csv",
        "region,latency_ms,uptime_pct\nfra,NaN,99.0\n",
    );

    assert!(loader::load(&path, DatasetFormat::Auto).is_err());
}

#[test]
fn test_load_empty_dataset_is_allowed() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "empty.json", "[]");

    let table = loader::load(&path, DatasetFormat::Auto).unwrap();
    assert!(table.is_empty());
}
