//! Errors surfaced by the HTTP handlers.

use analysis::AnalysisError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

pub const NO_CONTENT_MESSAGE: &str = "No content provided";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";
pub const HISTORY_FAILED_MESSAGE: &str = "Failed to load history. Please try again.";

/// Handler error type.
///
/// Only validation, body rejection and configuration messages reach the
/// client verbatim;
/// everything else is logged and replaced by a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad or missing client input.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Body is not a JSON object of the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// The analysis backend is not configured.
    #[error("Analysis backend unavailable: {0}")]
    Configuration(String),

    /// The analysis call itself failed.
    #[error("Analysis failed: {0}")]
    Analysis(#[source] AnalysisError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        if error.is_configuration() {
            ApiError::Configuration(error.to_string())
        } else {
            ApiError::Analysis(error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(message) => {
                warn!("{}", self);
                (StatusCode::BAD_REQUEST, "NO_CONTENT", message.clone())
            }
            ApiError::MalformedBody(rejection) => {
                warn!("{}", self);
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            ApiError::Configuration(message) => {
                warn!("{}", self);
                (StatusCode::SERVICE_UNAVAILABLE, "ANALYSIS_UNAVAILABLE", message.clone())
            }
            ApiError::Analysis(_) => {
                error!("Analysis error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_FAILED",
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
            ApiError::Database(_) => {
                error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    HISTORY_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
