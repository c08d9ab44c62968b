use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};

use crate::{error::ServerError, state::ServerState};

/// Prometheus text exposition of the registry.
pub async fn get_metrics(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let encoder = TextEncoder::new();
    let body = encoder.encode_to_string(&state.metrics_registry.gather())?;
    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_string())], body).into_response())
}
