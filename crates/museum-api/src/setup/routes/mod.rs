//! Route configuration and setup.
//!
//! Versioned API routes are nested under [`API_PREFIX`]; health checks live in [health](health).

mod health;

use crate::api_doc::ApiDoc;
use crate::auth::middleware::identify_middleware;
use crate::constants::{API_PREFIX, DEFAULT_HTTP_CONCURRENCY_LIMIT, OPENAPI_JSON_PATH};
use crate::handlers::{review, upload_status};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use museum_core::Config;
use museum_infra::request_id_middleware;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_HTTP_CONCURRENCY_LIMIT)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    Ok(build_router(state, cors, http_concurrency_limit))
}

/// Assemble the router with its middleware stack. Identification runs on every
/// route and never rejects; each operation decides whether it needs a login.
pub fn build_router(
    state: Arc<AppState>,
    cors: CorsLayer,
    http_concurrency_limit: usize,
) -> Router<()> {
    let auth_state = Arc::new(state.auth.clone());

    Router::new()
        .nest(API_PREFIX, api_routes())
        .merge(health::health_routes())
        .route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/docs"))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            identify_middleware,
        ))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[allow(deprecated)]
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/skins/{md5}/reject", post(review::reject_skin))
        .route("/skins/{md5}/approve", post(review::approve_skin))
        .route("/skins/{md5}/nsfw", post(review::mark_skin_nsfw))
        .route(
            "/skins/{md5}/nsfw-review-requests",
            post(review::request_nsfw_review_for_skin),
        )
        .route("/uploads/statuses", post(upload_status::upload_statuses))
        .route(
            "/uploads/statuses-by-md5",
            post(upload_status::upload_statuses_by_md5),
        )
}

pub fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
