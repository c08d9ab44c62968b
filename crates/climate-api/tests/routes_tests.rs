//! The non-data routes: welcome page, station list, health and metrics.

pub mod common;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum_test_helper::TestClient;

use climate_api::state::{self, InitializationError, ServerState};
use climate_api::routes;
use climate_api_configuration::Configuration;
use query_engine_execution::metrics::Metrics;
use tests_common::{FixtureBuilder, FixtureDatabase};

#[tokio::test]
async fn welcome_page_lists_every_route() {
    let database = FixtureDatabase::empty().await;
    let client = common::client(&database).await;

    let response = client.get("/").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let body = response.text().await;
    assert!(body.starts_with("Available Routes:<br>"));
    for route in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/&lt;start&gt;",
        "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
    ] {
        assert!(body.contains(route), "missing {route}");
    }
}

#[tokio::test]
async fn lists_every_station_in_store_order() {
    let database = FixtureBuilder::new()
        .station("USC00519397")
        .station("USC00513117")
        .station("USC00514830")
        .measurement("USC00513117", "2017-08-23", Some(0.0), 81.0)
        .build()
        .await;
    let client = common::client(&database).await;

    let stations: Vec<String> = common::get_json(&client, "/api/v1.0/stations").await;
    assert_eq!(stations, vec!["USC00519397", "USC00513117", "USC00514830"]);
}

#[tokio::test]
async fn an_empty_store_has_no_stations() {
    let database = FixtureDatabase::empty().await;
    let client = common::client(&database).await;

    let stations: Vec<String> = common::get_json(&client, "/api/v1.0/stations").await;
    assert!(stations.is_empty());
}

#[tokio::test]
async fn health_reports_a_usable_store() {
    let database = FixtureDatabase::empty().await;
    let client = common::client(&database).await;

    let response = client.get("/health").send().await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_an_unreachable_store() {
    let mut registry = prometheus::Registry::new();
    let missing = tempfile::tempdir().unwrap();
    let state = ServerState {
        configuration: Arc::new(Configuration {
            connection_uri: format!("sqlite://{}/hawaii.sqlite", missing.path().display()),
        }),
        metrics: Metrics::initialize(&mut registry).unwrap(),
        metrics_registry: registry,
    };
    let client = TestClient::new(routes::create_router(state));

    let response = client.get("/health").send().await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    common::assert_internal_error(&client, "/api/v1.0/stations").await;
}

#[tokio::test]
async fn refuses_to_start_without_the_declared_schema() {
    let database = FixtureDatabase::from_schema("CREATE TABLE station (id INTEGER)").await;
    let configuration = Configuration {
        connection_uri: database.connection_uri(),
    };

    let result = state::create_state(configuration, prometheus::Registry::new()).await;
    assert!(matches!(result, Err(InitializationError::StoreError(_))));
}

#[tokio::test]
async fn metrics_count_sessions_and_queries() {
    let database = FixtureBuilder::new().station("USC00519397").build().await;
    let client = common::client(&database).await;

    let _: Vec<String> = common::get_json(&client, "/api/v1.0/stations").await;
    common::assert_internal_error(&client, "/api/v1.0/tobs").await;

    let response = client.get("/metrics").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await;

    // One session for the startup schema check, one per data request.
    assert!(body.contains("climate_api_session_total 3"), "{body}");
    assert!(body.contains("climate_api_query_total 2"), "{body}");
    assert!(body.contains("climate_api_query_error_total 0"), "{body}");
    assert!(body.contains("climate_api_query_duration_seconds_count 2"), "{body}");
}
