mod get_health;
mod get_metrics;
mod get_precipitation;
mod get_stations;
mod get_temperature_stats;
mod get_tobs;
mod get_welcome;

use axum::{routing::get, Router};

use crate::state::ServerState;

pub use get_health::get_health;
pub use get_metrics::get_metrics;
pub use get_precipitation::get_precipitation;
pub use get_stations::get_stations;
pub use get_temperature_stats::{get_temperature_stats_between, get_temperature_stats_from};
pub use get_tobs::get_tobs;
pub use get_welcome::get_welcome;

/// Every route of the service. The static `/api/v1.0/...` routes take precedence over
/// `/api/v1.0/:start`.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(get_welcome))
        .route("/api/v1.0/precipitation", get(get_precipitation))
        .route("/api/v1.0/stations", get(get_stations))
        .route("/api/v1.0/tobs", get(get_tobs))
        .route("/api/v1.0/:start", get(get_temperature_stats_from))
        .route("/api/v1.0/:start/:end", get(get_temperature_stats_between))
        .route("/health", get(get_health))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}
