use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use common::{AnalyzeRequest, AnalyzeResponse, WritingFeedback};
use model::history::{self, NewManuscript};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::error::{ApiError, NO_CONTENT_MESSAGE};
use crate::schemas::{AppState, ErrorResponse};

/// Analyze a piece of writing
///
/// The model output is returned exactly as received in `analysis`; `feedback`
/// carries the parsed object when the output has the expected shape. The
/// submission is then recorded in the history, but a storage failure never
/// changes the response.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponse),
        (status = 400, description = "No content provided or body is not JSON", body = ErrorResponse),
        (status = 415, description = "Body is not declared as JSON", body = ErrorResponse),
        (status = 422, description = "Body does not match AnalyzeRequest", body = ErrorResponse),
        (status = 503, description = "Analysis backend not configured", body = ErrorResponse),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    trace!("Entering analyze function");
    let Json(request) = payload?;

    let content = request.content.as_deref().unwrap_or_default().trim();
    if content.is_empty() {
        return Err(ApiError::Validation(NO_CONTENT_MESSAGE.to_string()));
    }

    debug!(
        "Analyzing {} characters with model {}",
        content.chars().count(),
        state.analyzer.model()
    );
    let raw = state.analyzer.analyze(content).await?;

    let feedback = WritingFeedback::parse(&raw);
    if feedback.is_none() {
        warn!("Model output is not the expected feedback object, forwarding raw text");
    }

    record_history(&state, content, &raw, feedback.as_ref()).await;

    info!("Analysis delivered");
    Ok(Json(AnalyzeResponse {
        analysis: raw,
        feedback,
    }))
}

/// Best-effort history write: failures are logged and swallowed.
async fn record_history(
    state: &AppState,
    content: &str,
    raw: &str,
    feedback: Option<&WritingFeedback>,
) {
    let submission = NewManuscript {
        content: content.to_string(),
        ai_feedback: raw.to_string(),
        sentiment: feedback.and_then(WritingFeedback::sentiment_label),
    };

    if let Err(db_error) = history::record_manuscript(&state.db, submission).await {
        error!("Failed to record manuscript history: {}", db_error);
    }
}
