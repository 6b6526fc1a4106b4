use axum::{extract::State, response::Json};
use chrono::SecondsFormat;
use common::{content_preview, HistoryEntry, HistoryResponse};
use model::entities::manuscript;
use model::history::{recent_manuscripts, HISTORY_LIMIT};
use tracing::{debug, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// Get the most recent analyses
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Up to 10 most recent manuscripts, newest first", body = HistoryResponse),
        (status = 500, description = "History could not be loaded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, ApiError> {
    trace!("Entering get_history function");

    let manuscripts = recent_manuscripts(&state.db, HISTORY_LIMIT).await?;
    debug!("Returning {} history entries", manuscripts.len());

    let history = manuscripts.into_iter().map(history_entry).collect();
    Ok(Json(HistoryResponse { history }))
}

fn history_entry(model: manuscript::Model) -> HistoryEntry {
    HistoryEntry {
        id: model.id,
        title: model.title,
        content: content_preview(&model.content),
        ai_feedback: model.ai_feedback,
        created_at: model
            .created_at
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}
