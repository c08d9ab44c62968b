//! Errors returned by the API routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use query_engine_execution as execution;
use query_engine_translation as translation;

/// Everything that can go wrong while serving a request.
///
/// Clients see the same opaque 500 for all of these; the cause only goes to the log.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Translation(#[from] translation::Error),
    #[error("{0}")]
    Execution(#[from] execution::Error),
    #[error("the store has no measurements")]
    NoMeasurements,
    #[error("station '{0}' has no measurements")]
    NoStationMeasurements(String),
    #[error("no station has any measurements")]
    NoActiveStation,
    #[error("unable to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(
            meta.signal_type = "log",
            event.domain = "climate-api",
            event.name = "Request error",
            name = "Request error",
            body = %self,
            error = true,
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(JsonErrorResponse {
                message: "internal server error",
            }),
        )
            .into_response()
    }
}
