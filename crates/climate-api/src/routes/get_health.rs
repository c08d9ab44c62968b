use axum::{extract::State, http::StatusCode};

use crate::state::{check_store, ServerState};

/// 200 when the store can be opened and has the declared schema, 503 otherwise.
pub async fn get_health(State(state): State<ServerState>) -> StatusCode {
    match check_store(&state.configuration.connection_uri, &state.metrics).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!("health check failed: {err}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
