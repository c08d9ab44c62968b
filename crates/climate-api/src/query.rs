//! The read operations behind the API routes.
//!
//! Each operation opens its own session, runs its plans in order and closes the
//! session again, whether or not the plans succeeded.

use tracing::{info_span, Instrument};

use query_engine_execution::metrics::Metrics;
use query_engine_execution::{query, Session};
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_translation::date;
use query_engine_translation::query as plans;

use crate::error::ServerError;
use crate::state::ServerState;
use crate::types::output::{ActiveStation, LatestDate, Precipitation, TemperatureStats};

/// Precipitation for every measurement in the year leading up to the latest one.
pub async fn recent_precipitation(state: &ServerState) -> Result<Vec<Precipitation>, ServerError> {
    let mut session = open_session(state).await?;
    let result = async {
        let latest = latest_date(&mut session, &state.metrics, &plans::latest_date())
            .await?
            .ok_or(ServerError::NoMeasurements)?;
        let cutoff = date::one_year_prior(&latest)?;
        let rows: Vec<Precipitation> = query::fetch_all(
            &mut session,
            &state.metrics,
            &plans::precipitation_since(cutoff),
        )
        .await?;
        Ok::<_, ServerError>(rows)
    }
    .instrument(info_span!("Recent precipitation"))
    .await;
    close_session(session, result).await
}

/// Every station code, in store order.
pub async fn station_ids(state: &ServerState) -> Result<Vec<String>, ServerError> {
    let mut session = open_session(state).await?;
    let result = async {
        let rows: Vec<(String,)> =
            query::fetch_all(&mut session, &state.metrics, &plans::station_ids()).await?;
        Ok::<_, ServerError>(rows.into_iter().map(|(station,)| station).collect())
    }
    .instrument(info_span!("Station list"))
    .await;
    close_session(session, result).await
}

/// Temperatures of the most active station over the year leading up to its own latest
/// measurement.
pub async fn most_active_temperatures(state: &ServerState) -> Result<Vec<f64>, ServerError> {
    let mut session = open_session(state).await?;
    let result = async {
        let active: ActiveStation =
            query::fetch_optional(&mut session, &state.metrics, &plans::most_active_station())
                .await?
                .ok_or(ServerError::NoActiveStation)?;
        tracing::debug!(station = %active.station, count = active.count, "most active station");

        let latest = latest_date(
            &mut session,
            &state.metrics,
            &plans::latest_date_for_station(&active.station),
        )
        .await?
        .ok_or_else(|| ServerError::NoStationMeasurements(active.station.clone()))?;
        let cutoff = date::one_year_prior(&latest)?;

        let rows: Vec<(f64,)> = query::fetch_all(
            &mut session,
            &state.metrics,
            &plans::temperatures_since(&active.station, cutoff),
        )
        .await?;
        Ok::<_, ServerError>(rows.into_iter().map(|(tobs,)| tobs).collect())
    }
    .instrument(info_span!("Most active temperatures"))
    .await;
    close_session(session, result).await
}

/// Minimum, maximum and average temperature from `start`, up to and including `end`
/// when given. Always a single row.
pub async fn temperature_stats(
    state: &ServerState,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureStats>, ServerError> {
    let plan = async {
        let start = date::parse_date(start)?;
        let end = end.map(date::parse_date).transpose()?;
        Ok::<_, ServerError>(plans::temperature_stats(start, end))
    }
    .instrument(info_span!("Plan query"))
    .await?;

    let mut session = open_session(state).await?;
    let result: Result<Vec<TemperatureStats>, ServerError> =
        query::fetch_all(&mut session, &state.metrics, &plan)
            .instrument(info_span!("Temperature statistics"))
            .await
            .map_err(ServerError::from);
    close_session(session, result).await
}

async fn latest_date(
    session: &mut Session,
    metrics: &Metrics,
    plan: &ExecutionPlan,
) -> Result<Option<String>, ServerError> {
    let row: Option<LatestDate> = query::fetch_optional(session, metrics, plan).await?;
    Ok(row.and_then(|row| row.date))
}

async fn open_session(state: &ServerState) -> Result<Session, ServerError> {
    Ok(Session::open(&state.configuration.connection_uri, &state.metrics).await?)
}

/// Close the session, then hand back the operation's result. An operation error
/// takes precedence over a close error.
async fn close_session<T>(
    session: Session,
    result: Result<T, ServerError>,
) -> Result<T, ServerError> {
    let closed = session.close().await;
    let value = result?;
    closed?;
    Ok(value)
}
