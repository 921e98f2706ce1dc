use anyhow::{Context, Result};
use latency_api::{
    api::server::{self, AppState},
    dataset::loader,
    settings::Settings,
};
use metrics::gauge;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::{path::Path, sync::Arc};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn handle(settings: &Settings) -> Result<()> {
    if let Some(metrics) = &settings.metrics {
        PrometheusBuilder::new()
            .with_http_listener(metrics.addr)
            .install()
            .context("Failed to install Prometheus exporter")?;
        info!(addr = %metrics.addr, "Prometheus exporter listening");
    }

    let table = loader::load(Path::new(&settings.dataset.path), settings.dataset.format)?;
    info!(
        records = table.len(),
        regions = table.region_codes().len(),
        "measurement table ready"
    );
    gauge!("latency_api_dataset_records").set(table.len() as f64);

    let state = Arc::new(AppState::new(table));
    let shutdown = shutdown_listener();

    server::serve_until(settings.server.listen, state, shutdown).await
}

fn shutdown_listener() -> CancellationToken {
    let token = CancellationToken::new();
    let handle = token.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            handle.cancel();
        }
    });

    token
}
