//! Fires one hard-coded prompt at the Gemini API and prints the reply.

use std::env;

use serde_json::{json, Value};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.0-flash";
const PROMPT: &str = "How many contestants are in Love Island USA season 7?";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GEMINI_KEY").unwrap_or_default();

    let url = format!("{BASE_URL}/models/{MODEL}:generateContent?key={api_key}");
    let payload = json!({
        "contents": [
            {
                "parts": [
                    { "text": PROMPT }
                ]
            }
        ]
    });

    let client = reqwest::Client::new();
    let response = match client.post(&url).json(&payload).send().await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("Error: {err}");
            return;
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        match parsed
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            Some(text) => println!("Response: {text}"),
            None => println!("Error: {status} {body}"),
        }
    } else {
        println!("Error: {status} {body}");
    }
}
