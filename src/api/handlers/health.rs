//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::CatalogState;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Catalog loaded
/// - **503 Service Unavailable**: Catalog loading or its last load failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": {
///       "status": "ok",
///       "message": "250 countries loaded"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;

    let healthy = catalog_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the catalog load state.
async fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog.state().await {
        CatalogState::Ready { countries, .. } => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} countries loaded", countries.len())),
        },
        CatalogState::Loading => CheckStatus {
            status: "loading".to_string(),
            message: None,
        },
        CatalogState::Failed { message } => CheckStatus {
            status: "error".to_string(),
            message: Some(message),
        },
    }
}
