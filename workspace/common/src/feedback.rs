use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Longest sentiment label stored alongside a manuscript.
const SENTIMENT_MAX_CHARS: usize = 50;

/// Structured feedback the model is asked to produce.
///
/// The model is instructed to answer with exactly this object, but nothing
/// guarantees it does, so it is only ever derived from the raw text via
/// [`WritingFeedback::parse`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct WritingFeedback {
    /// One-word mood label, e.g. "Melancholic".
    pub sentiment: String,
    /// Two sentences of constructive feedback.
    pub suggestions: String,
    /// Rhythm and flow of the piece.
    pub pacing: String,
    /// Vocabulary and imagery.
    #[serde(rename = "wordChoice")]
    pub word_choice: String,
    /// Overall emotional tone.
    pub tone: String,
}

impl WritingFeedback {
    /// Parses raw model output into typed feedback.
    ///
    /// Tolerates a surrounding markdown code fence (with or without a language
    /// tag) even though the prompt forbids one. Returns `None` when the text is
    /// not a JSON object carrying all five string fields.
    pub fn parse(raw: &str) -> Option<Self> {
        let body = strip_code_fence(raw.trim());
        match serde_json::from_str::<WritingFeedback>(body) {
            Ok(feedback) => Some(feedback),
            Err(e) => {
                debug!("Model output is not structured feedback: {}", e);
                None
            }
        }
    }

    /// Sentiment label suitable for the `sentiment` column, if non-blank.
    pub fn sentiment_label(&self) -> Option<String> {
        let label = self.sentiment.trim();
        if label.is_empty() {
            None
        } else {
            Some(label.chars().take(SENTIMENT_MAX_CHARS).collect())
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Skip the info string ("json") up to the first newline.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
