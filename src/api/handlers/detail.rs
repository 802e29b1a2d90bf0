//! Handler for the country detail endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::detail::CountryDetailResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::country_code::normalize_country_code;

/// Resolves one country and its neighbors.
///
/// # Endpoint
///
/// `GET /api/countries/{code}`
///
/// Issues one provider call for the country and, if it has borders, one
/// batch call for the neighbors. A failed neighbor call yields an empty
/// `neighbors` list rather than an error.
///
/// # Errors
///
/// - 400 Bad Request for a malformed code
/// - 404 Not Found when the provider knows no such country
/// - 502 Bad Gateway for other provider failures
pub async fn country_detail_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CountryDetailResponse>, AppError> {
    let code = normalize_country_code(&code)?;

    let detail = state
        .detail
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::bad_request("Country code must not be empty", json!({})))?;

    Ok(Json(detail.into()))
}
