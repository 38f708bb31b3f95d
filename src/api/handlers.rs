use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::AppState;

use super::models::{ErrorResponse, GenerateTextRequest, GenerateTextResponse, HealthResponse};

pub async fn generate_text(
    State(state): State<AppState>,
    payload: Option<Json<GenerateTextRequest>>,
) -> Result<Json<GenerateTextResponse>, ApiError> {
    let prompt = payload
        .and_then(|Json(body)| body.prompt)
        .ok_or(ApiError::MissingPrompt)?;

    let generated_text = state.gemini.generate(&prompt).await.map_err(|err| {
        tracing::error!(error = %err, "text generation failed");
        ApiError::from(err)
    })?;

    Ok(Json(GenerateTextResponse { generated_text }))
}

/// Liveness only; answers the same with or without configuration.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        message: "API server is healthy!",
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            details: None,
        }),
    )
        .into_response()
}
