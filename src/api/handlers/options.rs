//! Handler for the ranking options endpoint.

use axum::{Json, extract::State};

use crate::api::dto::options::OptionsResponse;
use crate::state::AppState;

/// Lists selectable regions, sort options and the page size.
///
/// # Endpoint
///
/// `GET /api/options`
pub async fn options_handler(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from(state.options.as_ref()))
}
