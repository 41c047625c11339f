//! Health, documentation and middleware integration tests.
//!
//! Run with: `cargo test -p museum-api --test health_test`

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_liveness() {
    let app = setup_test_app();
    let response = app.client().get("/health/live").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["status"], "alive");
}

#[tokio::test]
async fn test_readiness_pings_store() {
    let app = setup_test_app();
    let response = app.client().get("/health/ready").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["database"], "ready");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();
    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert!(data["paths"]["/api/v0/uploads/statuses"].is_object());
    assert_eq!(
        data["paths"]["/api/v0/uploads/statuses-by-md5"]["post"]["deprecated"],
        true
    );
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = setup_test_app();
    let response = app
        .client()
        .get("/health/live")
        .add_header("X-Request-ID", "req-from-client")
        .await;
    assert_eq!(response.header("X-Request-ID"), "req-from-client");
}
