use axum::{extract::State, Json};

use crate::{error::ServerError, query, state::ServerState};

pub async fn get_stations(
    State(state): State<ServerState>,
) -> Result<Json<Vec<String>>, ServerError> {
    let stations = query::station_ids(&state).await?;
    Ok(Json(stations))
}
