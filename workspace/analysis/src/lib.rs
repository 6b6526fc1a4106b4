//! Client for the external generative-text API that reviews creative writing.
//!
//! [`build_prompt`] wraps the submitted text in a fixed instruction block and
//! [`GeminiClient`] sends it to Google's `generateContent` endpoint. Callers
//! depend on the [`AnalysisClient`] trait so tests can substitute their own
//! implementation.

mod error;
mod gemini;
mod prompt;

pub use error::{AnalysisError, Result};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use prompt::build_prompt;

use async_trait::async_trait;

/// Something that can turn a piece of writing into model feedback.
#[async_trait]
pub trait AnalysisClient: Send + Sync + std::fmt::Debug {
    /// Returns the raw model output for `content`.
    ///
    /// The output is expected to be a JSON object but is not validated here.
    async fn analyze(&self, content: &str) -> Result<String>;

    /// Identifier of the model answering requests.
    fn model(&self) -> &str;
}
