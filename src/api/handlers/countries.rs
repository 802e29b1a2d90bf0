//! Handlers for the ranking endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::countries::{RankingParams, RankingResponse, RefreshResponse};
use crate::application::services::CatalogState;
use crate::error::AppError;
use crate::state::AppState;

/// Ranks the loaded countries.
///
/// # Endpoint
///
/// `GET /api/countries`
///
/// # Query Parameters
///
/// - `search` (optional): Case-insensitive substring of name, region or subregion
/// - `regions` (optional): Comma-separated region names, any of which matches
/// - `un_member` (optional): `true` keeps UN members only
/// - `independent` (optional): `true` keeps independent countries only
/// - `sort` (optional): `population` (default), `name` or `area`
/// - `page` (optional): 1-based page number (default: 1)
/// - `view_all` (optional): `true` returns every match on one page
///
/// # Response
///
/// ```json
/// {
///   "found": 2,
///   "sort": "name",
///   "pagination": {
///     "page": 1, "page_size": 50, "total_items": 2, "total_pages": 1,
///     "has_prev": false, "has_next": false, "view_all": false
///   },
///   "items": [{ "code": "GBR", "name": "United Kingdom", ... }]
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for invalid parameters
/// - 503 Service Unavailable while the catalog is loading
/// - 502 Bad Gateway when the last catalog load failed
pub async fn ranking_handler(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<RankingResponse>, AppError> {
    params.validate()?;

    let query = params.to_query();
    let ranking = state
        .catalog
        .rank(&query, state.page_size())
        .await
        .map_err(not_ready)?;

    Ok(Json(ranking.into()))
}

/// Refetches the country list from the provider.
///
/// # Endpoint
///
/// `POST /api/countries/refresh`
///
/// The previous error, if any, is cleared as soon as the refetch starts.
///
/// # Errors
///
/// - 502 Bad Gateway when the provider call fails
/// - 503 Service Unavailable when a newer refresh superseded this one
pub async fn refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    match state.catalog.load().await {
        CatalogState::Ready {
            countries,
            fetched_at,
        } => Ok(Json(RefreshResponse {
            status: "ready",
            count: countries.len(),
            fetched_at,
        })),
        other => Err(not_ready(other)),
    }
}

/// Maps a catalog state other than ready to the matching error.
fn not_ready(state: CatalogState) -> AppError {
    match state {
        CatalogState::Failed { message } => {
            AppError::upstream(message, json!({ "status": "error" }))
        }
        CatalogState::Loading => AppError::unavailable(
            "Countries are still loading",
            json!({ "status": "loading" }),
        ),
        CatalogState::Ready { .. } => {
            AppError::internal("Catalog became ready unexpectedly", json!({}))
        }
    }
}
