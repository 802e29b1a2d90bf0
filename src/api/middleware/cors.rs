//! CORS policy for browser clients.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows read access and refresh from any origin.
///
/// The API is public and carries no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
