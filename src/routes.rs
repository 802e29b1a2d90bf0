//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Catalog load status (public)
//! - `/api/*`            - Ranking and detail API (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **CORS** - Any origin, GET and POST
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter for `/api`; it reads the peer address, so
///   pass `None` when the router is not served with connect info
pub fn app_router(state: AppState, rate_limit: Option<RateLimitLayer>) -> NormalizePath<Router> {
    let api_router = match rate_limit {
        Some(limit) => api::routes::api_routes().layer(limit),
        None => api::routes::api_routes(),
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
