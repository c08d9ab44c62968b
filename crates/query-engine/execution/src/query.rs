//! Execute an execution plan against the database.

use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::FromRow;
use tracing::{info_span, Instrument};

use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::string::{Param, SQL};

use crate::error::Error;
use crate::metrics::Metrics;
use crate::session::Session;

/// Run a plan and decode every row it returns.
pub async fn fetch_all<T>(
    session: &mut Session,
    metrics: &Metrics,
    plan: &ExecutionPlan,
) -> Result<Vec<T>, Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let query = plan.query_sql();
    log_query(plan, &query);

    let timer = metrics.query_duration.start_timer();
    let result = build_query_with_params::<T>(&query)
        .fetch_all(session.connection())
        .instrument(info_span!("Execute query", root_field = %plan.root_field))
        .await;
    timer.observe_duration();

    record(metrics, plan, result)
}

/// Run a plan and decode its first row, if any.
pub async fn fetch_optional<T>(
    session: &mut Session,
    metrics: &Metrics,
    plan: &ExecutionPlan,
) -> Result<Option<T>, Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let query = plan.query_sql();
    log_query(plan, &query);

    let timer = metrics.query_duration.start_timer();
    let result = build_query_with_params::<T>(&query)
        .fetch_optional(session.connection())
        .instrument(info_span!("Execute query", root_field = %plan.root_field))
        .await;
    timer.observe_duration();

    record(metrics, plan, result)
}

/// Create a SQLx query based on our SQL query and bind our parameters to it.
fn build_query_with_params<T>(query: &SQL) -> QueryAs<'_, Sqlite, T, SqliteArguments<'_>>
where
    T: for<'r> FromRow<'r, SqliteRow>,
{
    query
        .params
        .iter()
        .fold(sqlx::query_as::<_, T>(&query.sql), |sqlx_query, param| {
            match param {
                Param::String(string) => sqlx_query.bind(string.as_str()),
            }
        })
}

fn log_query(plan: &ExecutionPlan, query: &SQL) {
    tracing::debug!(
        root_field = %plan.root_field,
        params = ?query.params,
        "generated SQL:\n{}",
        sqlformat::format(
            &query.sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default()
        )
    );
}

fn record<R>(
    metrics: &Metrics,
    plan: &ExecutionPlan,
    result: Result<R, sqlx::Error>,
) -> Result<R, Error> {
    match result {
        Ok(rows) => {
            metrics.query_total.inc();
            Ok(rows)
        }
        Err(source) => {
            metrics.query_error_total.inc();
            Err(Error::Query {
                root_field: plan.root_field.clone(),
                source,
            })
        }
    }
}
