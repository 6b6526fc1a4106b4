use axum::response::Json;
use tracing::instrument;

use crate::schemas::HealthResponse;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "VerseVibe backend is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
