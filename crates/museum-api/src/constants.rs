//! API constants
//!
//! All versioned routes are nested under [`API_PREFIX`]. Handler path annotations
//! use the same literal because `utoipa` requires compile-time strings.

/// Versioned API prefix
pub const API_PREFIX: &str = "/api/v0";

/// Path the OpenAPI document is served from
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

/// Timeout applied to each readiness dependency check
pub const READINESS_TIMEOUT_SECS: u64 = 5;

/// Default upper bound on concurrently handled requests
pub const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 1_000;
