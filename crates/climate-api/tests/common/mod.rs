//! Build a router over a fixture database and talk to it.

use axum::http::StatusCode;
use axum_test_helper::TestClient;

use climate_api::{routes, state};
use climate_api_configuration::Configuration;
use tests_common::FixtureDatabase;

/// A test client for the full router, backed by `database`.
pub async fn client(database: &FixtureDatabase) -> TestClient {
    tests_common::init_logging();
    let configuration = Configuration {
        connection_uri: database.connection_uri(),
    };
    let state = state::create_state(configuration, prometheus::Registry::new())
        .await
        .expect("create_state");
    TestClient::new(routes::create_router(state))
}

/// GET `path`, expect a 200 and decode the JSON body.
pub async fn get_json<T: serde::de::DeserializeOwned>(client: &TestClient, path: &str) -> T {
    let response = client.get(path).send().await;
    assert_eq!(response.status(), StatusCode::OK, "GET {path}");
    response.json().await
}

/// GET `path` and expect the opaque internal error.
pub async fn assert_internal_error(client: &TestClient, path: &str) {
    let response = client.get(path).send().await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "GET {path}");
    let body: serde_json::Value = response.json().await;
    assert_eq!(
        body,
        serde_json::json!({ "message": "internal server error" })
    );
}
