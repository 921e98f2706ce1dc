use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use metrics::counter;
use serde::Serialize;
use thiserror::Error;

/// Request-level failures surfaced to the caller as client errors. Unknown
/// regions and empty tables are normal empty results, not errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        counter!("latency_api_request_errors_total").increment(1);

        let (status, message) = match self {
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
