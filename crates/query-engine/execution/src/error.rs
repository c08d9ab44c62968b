//! Errors for query execution.

use query_engine_metadata::metadata::ScalarType;
use thiserror::Error;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to open a session: {0}")]
    Connect(sqlx::Error),
    #[error("query '{root_field}' failed: {source}")]
    Query {
        root_field: String,
        source: sqlx::Error,
    },
    #[error("unable to close the session: {0}")]
    Close(sqlx::Error),
    #[error("unable to inspect the store schema: {0}")]
    Introspection(sqlx::Error),
    #[error("table '{0}' is missing from the store")]
    MissingTable(String),
    #[error("column '{column}' is missing from table '{table}'")]
    MissingColumn { table: String, column: String },
    #[error("column '{column}' of table '{table}' is declared '{found}', expected {expected}")]
    MismatchedType {
        table: String,
        column: String,
        expected: ScalarType,
        found: String,
    },
}
