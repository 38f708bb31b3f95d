use std::env;
use std::fmt;

use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// An empty `GEMINI_KEY` is not fatal at startup; each generation request
/// reports it instead.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5000);

        let api_key = env::var("GEMINI_KEY").unwrap_or_default();

        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            port,
            api_key,
            base_url,
            model,
        }
    }
}
