//! API route configuration.

use crate::api::handlers::{
    country_detail_handler, options_handler, ranking_handler, refresh_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /options`             - Regions, sort options and page size
/// - `GET  /countries`           - Filtered, sorted and paginated ranking
/// - `POST /countries/refresh`   - Refetch the country list
/// - `GET  /countries/{code}`    - Country detail with neighbors
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(options_handler))
        .route("/countries", get(ranking_handler))
        .route("/countries/refresh", post(refresh_handler))
        .route("/countries/{code}", get(country_detail_handler))
}
