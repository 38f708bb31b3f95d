use dotenvy::dotenv;
use gemini_relay::config::Config;
use gemini_relay::{build_app, run_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("GEMINI_KEY is not set; generation requests will fail until it is provided");
    }

    let app = build_app(&config);
    run_server(app, config.port).await;
}
