//! A short-lived connection to the store, scoped to one request.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error::Error;
use crate::metrics::Metrics;

/// One read-only connection to the store.
///
/// Call [`Session::close`] when done. A session that is dropped instead still
/// releases its connection, without reporting close errors.
#[derive(Debug)]
pub struct Session {
    connection: SqliteConnection,
}

impl Session {
    /// Open a new connection. The database file must already exist.
    pub async fn open(connection_uri: &str, metrics: &Metrics) -> Result<Session, Error> {
        let options = SqliteConnectOptions::from_str(connection_uri)
            .map_err(Error::Connect)?
            .read_only(true)
            .create_if_missing(false);

        let connection = options.connect().await.map_err(Error::Connect)?;
        metrics.session_total.inc();
        tracing::debug!("opened session");

        Ok(Session { connection })
    }

    /// Release the connection.
    pub async fn close(self) -> Result<(), Error> {
        self.connection.close().await.map_err(Error::Close)?;
        tracing::debug!("closed session");
        Ok(())
    }

    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.connection
    }
}
