use std::sync::Arc;

use analysis::AnalysisClient;
use common::{AnalyzeRequest, AnalyzeResponse, HistoryEntry, HistoryResponse, WritingFeedback};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Client used to analyze submitted writing
    pub analyzer: Arc<dyn AnalysisClient>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub error: String,
    /// Error code
    pub code: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    pub message: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::analyze::analyze,
        crate::handlers::history::get_history,
    ),
    components(
        schemas(
            AnalyzeRequest,
            AnalyzeResponse,
            WritingFeedback,
            HistoryEntry,
            HistoryResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "analysis", description = "Writing analysis endpoints"),
        (name = "history", description = "Analysis history endpoints"),
    ),
    info(
        title = "VerseVibe API",
        description = "Feedback on poetry and creative writing from a generative model, with a history of recent submissions",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
