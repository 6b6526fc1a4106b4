//! Common transport-layer types shared between the HTTP handlers, the
//! persistence layer and the analysis client.
//! Keeping the payload shapes and text rules here means every crate agrees on
//! how a manuscript is titled, previewed and what structured feedback looks like.

mod feedback;
mod text;

pub use feedback::WritingFeedback;
pub use text::{content_preview, derive_title};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body accepted by `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeRequest {
    /// The piece of writing to analyze. A missing field is treated as empty.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response body of a successful `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeResponse {
    /// Raw text returned by the model, forwarded unmodified.
    pub analysis: String,
    /// Structured view of `analysis` when it parses as the expected object.
    pub feedback: Option<WritingFeedback>,
}

/// One row of the history feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoryEntry {
    pub id: i32,
    pub title: String,
    /// First 200 characters of the stored content.
    pub content: String,
    pub ai_feedback: Option<String>,
    /// Insert time, RFC 3339 in UTC.
    pub created_at: String,
}

/// Response body of `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoryResponse {
    /// Most recent manuscripts, newest first.
    pub history: Vec<HistoryEntry>,
}
