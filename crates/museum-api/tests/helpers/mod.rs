//! Test helpers: build the router over in-memory stores for integration tests.
//!
//! Run from workspace root: `cargo test -p museum-api`. No database is needed.

use axum_test::TestServer;
use chrono::Duration;
use museum_api::auth::jwt::issue_token;
use museum_api::constants;
use museum_api::setup::routes::build_router;
use museum_api::test_helpers::{TestHarness, TEST_JWT_SECRET, TEST_MASTER_API_KEY};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus the mocks behind it.
pub struct TestApp {
    pub server: TestServer,
    pub harness: TestHarness,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn setup_test_app() -> TestApp {
    let harness = TestHarness::new();
    let router = build_router(Arc::new(harness.app_state()), CorsLayer::permissive(), 64);
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp { server, harness }
}

/// `Authorization` header value carrying the master API key
pub fn master_key_auth() -> String {
    format!("Bearer {}", TEST_MASTER_API_KEY)
}

/// `Authorization` header value carrying a freshly signed reviewer JWT
pub fn jwt_auth(subject: &str) -> String {
    let token = issue_token(subject, TEST_JWT_SECRET, Duration::hours(1))
        .expect("Failed to sign test token");
    format!("Bearer {}", token)
}

/// `Authorization` header value carrying an expired reviewer JWT
pub fn expired_jwt_auth(subject: &str) -> String {
    let token = issue_token(subject, TEST_JWT_SECRET, Duration::hours(-1))
        .expect("Failed to sign test token");
    format!("Bearer {}", token)
}
