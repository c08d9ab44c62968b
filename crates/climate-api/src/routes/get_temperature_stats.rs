use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::ServerError, query, state::ServerState, types::output::TemperatureStats};

pub async fn get_temperature_stats_from(
    State(state): State<ServerState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>, ServerError> {
    let stats = query::temperature_stats(&state, &start, None).await?;
    Ok(Json(stats))
}

/// Both ends are inclusive.
pub async fn get_temperature_stats_between(
    State(state): State<ServerState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>, ServerError> {
    let stats = query::temperature_stats(&state, &start, Some(&end)).await?;
    Ok(Json(stats))
}
