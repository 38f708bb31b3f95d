mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{generate_text, health, not_found};
#[allow(unused_imports)]
pub use models::{ErrorResponse, GenerateTextRequest, GenerateTextResponse, HealthResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-text", post(generate_text))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
