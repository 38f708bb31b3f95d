use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_KEY not set in environment variables.")]
    MissingApiKey,
    #[error("Error connecting to Gemini API: {0}")]
    Http(#[source] reqwest::Error),
    #[error("Error connecting to Gemini API: {status}")]
    Status { status: StatusCode, body: String },
    #[error("Unexpected response format from Gemini API.")]
    UnexpectedFormat { body: Value },
}

impl GeminiError {
    // reqwest errors embed the request URL, key query parameter and all;
    // strip it before the message can reach a response body or log line.
    fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let payload = GenerateContentRequest::from_prompt(prompt);

        // TODO: decide whether this call needs a bounded timeout; today a
        // stalled upstream parks the request until the connection drops.
        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(GeminiError::http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let raw = response.text().await.map_err(GeminiError::http)?;
        let body: Value = match serde_json::from_str(&raw) {
            Ok(body) => body,
            Err(_) => {
                return Err(GeminiError::UnexpectedFormat {
                    body: Value::String(raw),
                })
            }
        };

        let decoded: GenerateContentResponse = match serde_json::from_value(body.clone()) {
            Ok(decoded) => decoded,
            Err(_) => return Err(GeminiError::UnexpectedFormat { body }),
        };

        decoded
            .into_first_text()
            .ok_or(GeminiError::UnexpectedFormat { body })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_owned(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
