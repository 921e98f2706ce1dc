use crate::{
    aggregator::{self, RegionStatMap},
    api::{ApiError, LatencyRequest},
    dataset::MeasurementTable,
};
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
    serve,
};
use metrics::counter;
use serde::Serialize;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Shared request-handling state: the measurement table, loaded once at
/// startup and read-only thereafter.
#[derive(Debug)]
pub struct AppState {
    table: MeasurementTable,
}

impl AppState {
    pub fn new(table: MeasurementTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MeasurementTable {
        &self.table
    }
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api", post(latency_report))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Serve the API until the shutdown token is cancelled.
pub async fn serve_until(
    listen: SocketAddr,
    state: SharedState,
    shutdown: CancellationToken,
) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;

    info!(%listen, "HTTP server listening");

    serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("HTTP server error")
}

async fn latency_report(
    State(state): State<SharedState>,
    payload: Result<Json<LatencyRequest>, JsonRejection>,
) -> Result<Json<RegionStatMap>, ApiError> {
    let Json(request) = payload?;
    counter!("latency_api_requests_total").increment(1);

    let report = aggregator::compute(state.table(), &request.regions, request.threshold_ms);
    debug!(
        regions = request.regions.len(),
        matched = report.len(),
        "served latency report"
    );

    Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    records: usize,
}

async fn healthz(State(state): State<SharedState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        records: state.table().len(),
    })
}
