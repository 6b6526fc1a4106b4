use thiserror::Error;

/// Error types for the analysis client
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The backend cannot be used at all, e.g. no API key was configured.
    /// Raised before any network activity.
    #[error("{0}")]
    Configuration(String),

    /// Transport-level failure: connect, timeout, body decoding
    #[error("Request to analysis backend failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Analysis backend returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The backend answered but produced no text
    #[error("Analysis backend returned no text")]
    EmptyResponse,
}

impl AnalysisError {
    /// Whether this error means the backend is not configured, as opposed to a
    /// failure of an actual call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AnalysisError::Configuration(_))
    }
}

/// Type alias for Result with AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;
