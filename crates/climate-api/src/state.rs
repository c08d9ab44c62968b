//! Transient state used by the server.
//!
//! This is initialized on startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use climate_api_configuration::Configuration;
use query_engine_execution::{introspection, metrics, Session};
use query_engine_metadata::metadata::TABLES;

/// State shared by every route.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub configuration: Arc<Configuration>,
    pub metrics: metrics::Metrics,
    pub metrics_registry: prometheus::Registry,
}

/// Register our metrics and make sure the store is usable.
pub async fn create_state(
    configuration: Configuration,
    mut metrics_registry: prometheus::Registry,
) -> Result<ServerState, InitializationError> {
    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(&mut metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    check_store(&configuration.connection_uri, &metrics)
        .instrument(info_span!("Check store schema"))
        .await
        .map_err(InitializationError::StoreError)?;

    Ok(ServerState {
        configuration: Arc::new(configuration),
        metrics,
        metrics_registry,
    })
}

/// Open a session and check the store has every declared table and column.
pub async fn check_store(
    connection_uri: &str,
    metrics: &metrics::Metrics,
) -> Result<(), query_engine_execution::Error> {
    let mut session = Session::open(connection_uri, metrics).await?;
    let checked = introspection::check_tables(&mut session, &TABLES).await;
    let closed = session.close().await;
    checked.and(closed)
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("the store is not usable: {0}")]
    StoreError(query_engine_execution::Error),
}
