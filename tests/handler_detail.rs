mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use world_ranks::api::handlers::country_detail_handler;
use world_ranks::domain::repositories::{SourceCall, SourceError};

use common::{StubSource, create_test_state, sample_countries};

fn server(source: Arc<StubSource>) -> TestServer {
    let app = Router::new()
        .route("/api/countries/{code}", get(country_detail_handler))
        .with_state(create_test_state(source));
    TestServer::new(app).unwrap()
}

fn neighbor_codes(json: &Value) -> Vec<String> {
    json["neighbors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["code"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_detail_with_neighbors_in_border_order() {
    let source = Arc::new(StubSource::new(sample_countries()));
    let server = server(source.clone());

    let response = server.get("/api/countries/USA").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["country"]["code"], "USA");
    assert_eq!(json["country"]["name"], "United States");
    assert_eq!(json["country"]["borders"], serde_json::json!(["CAN", "MEX"]));
    assert_eq!(neighbor_codes(&json), vec!["CAN", "MEX"]);

    assert_eq!(source.code_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.codes_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_detail_without_borders_makes_one_call() {
    let source = Arc::new(StubSource::new(sample_countries()));
    let server = server(source.clone());

    let response = server.get("/api/countries/GBR").await;

    response.assert_status_ok();
    assert!(neighbor_codes(&response.json::<Value>()).is_empty());
    assert_eq!(source.total_calls(), 1);
}

#[tokio::test]
async fn test_lowercase_code_is_normalized() {
    let source = Arc::new(StubSource::new(sample_countries()));
    let server = server(source);

    let response = server.get("/api/countries/can").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["country"]["code"], "CAN");
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let source = Arc::new(StubSource::new(sample_countries()));
    let server = server(source.clone());

    let response = server.get("/api/countries/XYZ").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Failed to fetch country");
    assert_eq!(source.codes_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_code_skips_provider() {
    let source = Arc::new(StubSource::new(sample_countries()));
    let server = server(source.clone());

    let response = server.get("/api/countries/U.S.A").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(source.total_calls(), 0);
}

#[tokio::test]
async fn test_neighbor_failure_keeps_country() {
    let source = Arc::new(
        StubSource::new(sample_countries()).with_neighbors_error(SourceError::Status {
            call: SourceCall::Neighbors,
            status: 503,
        }),
    );
    let server = server(source);

    let response = server.get("/api/countries/USA").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["country"]["code"], "USA");
    assert!(neighbor_codes(&json).is_empty());
}
