use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};

use crate::error::{AnalysisError, Result};
use crate::prompt::build_prompt;
use crate::AnalysisClient;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const MISSING_KEY_MESSAGE: &str = "GEMINI_API_KEY is missing. Set it in the environment or create a .env file with:\nGEMINI_API_KEY=your_key_here";

/// Settings for [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; `None` or blank leaves the client unconfigured.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Upper bound for a whole request, connect included.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// [`AnalysisClient`] backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds the client. A missing key is not an error here: the client is
    /// created anyway and every [`AnalysisClient::analyze`] call fails with
    /// [`AnalysisError::Configuration`].
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let api_key = config
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            client,
            api_key,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("configured", &self.is_configured())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    #[instrument(skip(self, content), fields(model = %self.model))]
    async fn analyze(&self, content: &str) -> Result<String> {
        trace!("Entering GeminiClient::analyze");
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Analysis requested but GEMINI_API_KEY is not configured");
            return Err(AnalysisError::Configuration(MISSING_KEY_MESSAGE.to_string()));
        };

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(content)),
                }],
            }],
        };

        debug!("Sending generateContent request to {}", self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("Analysis backend returned {}: {}", status, body);
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.into_text().ok_or(AnalysisError::EmptyResponse)?;
        info!("Received analysis ({} characters)", text.chars().count());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
