mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use world_ranks::api::handlers::health_handler;
use world_ranks::domain::repositories::{SourceCall, SourceError};
use world_ranks::state::AppState;

use common::{StubSource, create_loaded_state, create_test_state, sample_countries};

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = create_loaded_state(Arc::new(StubSource::new(sample_countries())), 50).await;
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["catalog"]["message"], "6 countries loaded");
}

#[tokio::test]
async fn test_health_while_loading() {
    let state = create_test_state(Arc::new(StubSource::new(sample_countries())));
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["catalog"]["status"], "loading");
    assert!(json["checks"]["catalog"].get("message").is_none());
}

#[tokio::test]
async fn test_health_after_failed_load() {
    let source = StubSource::failing_all(SourceError::Status {
        call: SourceCall::AllCountries,
        status: 500,
    });
    let state = create_loaded_state(Arc::new(source), 50).await;
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["catalog"]["status"], "error");
    assert_eq!(
        json["checks"]["catalog"]["message"],
        "Failed to fetch countries"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = create_test_state(Arc::new(StubSource::default()));
    let server = server(state);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("catalog").is_some());
}
