pub mod api;
pub mod config;
pub mod error;
pub mod gemini;

use axum::Router;

use crate::config::Config;
use crate::gemini::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

pub fn build_app(config: &Config) -> Router {
    let state = AppState {
        gemini: GeminiClient::new(&config.api_key, &config.base_url, &config.model),
    };

    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    tracing::info!(port, "gemini-relay listening");

    axum::serve(listener, app).await.expect("server failed");
}
