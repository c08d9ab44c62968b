use axum::{extract::State, Json};

use crate::{error::ServerError, query, state::ServerState, types::output::Precipitation};

pub async fn get_precipitation(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Precipitation>>, ServerError> {
    let rows = query::recent_precipitation(&state).await?;
    Ok(Json(rows))
}
