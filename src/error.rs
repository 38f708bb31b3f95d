use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::gemini::GeminiError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GEMINI_KEY not set in environment variables.")]
    MissingApiKey,

    #[error("Missing 'prompt' in request body.")]
    MissingPrompt,

    #[error("{message}")]
    Upstream {
        message: String,
        details: Option<Value>,
    },

    #[error("Unexpected response format from Gemini API.")]
    UnexpectedFormat { body: Value },

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => ApiError::MissingApiKey,
            // Builder errors never reached the network; not an upstream failure.
            GeminiError::Http(err) if err.is_builder() => ApiError::Internal(err.to_string()),
            GeminiError::Http(err) => ApiError::Upstream {
                message: format!("Error connecting to Gemini API: {err}"),
                details: None,
            },
            GeminiError::Status { status, body } => ApiError::Upstream {
                message: format!("Error connecting to Gemini API: {status}"),
                details: Some(Value::String(body)),
            },
            GeminiError::UnexpectedFormat { body } => ApiError::UnexpectedFormat { body },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let (status, details) = match self {
            ApiError::MissingPrompt => (StatusCode::BAD_REQUEST, None),
            ApiError::MissingApiKey | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            ApiError::Upstream { details, .. } => (StatusCode::INTERNAL_SERVER_ERROR, details),
            ApiError::UnexpectedFormat { body } => (StatusCode::INTERNAL_SERVER_ERROR, Some(body)),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
