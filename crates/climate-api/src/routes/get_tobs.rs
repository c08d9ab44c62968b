use axum::{extract::State, Json};

use crate::{error::ServerError, query, state::ServerState};

/// Temperatures only, without dates.
pub async fn get_tobs(State(state): State<ServerState>) -> Result<Json<Vec<f64>>, ServerError> {
    let temperatures = query::most_active_temperatures(&state).await?;
    Ok(Json(temperatures))
}
