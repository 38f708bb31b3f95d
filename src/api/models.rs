use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GenerateTextRequest {
    /// `None` when the field is absent or null; the handler rejects both.
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateTextResponse {
    pub generated_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
