use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::settings::Settings;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ANTHROPIC_API_KEY environment variable must be set")]
    MissingApiKey,
    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("generation service response contained no text block")]
    EmptyResponse,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// One synchronous call to the messages endpoint; returns the first text block.
/// No retries and no timeout beyond the client's defaults.
pub fn generate(settings: &Settings, prompt: &str) -> Result<String, ApiError> {
    let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| ApiError::MissingApiKey)?;

    let body = MessagesRequest {
        model: &settings.model,
        max_tokens: settings.max_tokens,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(format!("{}/v1/messages", settings.api_base))
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    let parsed: MessagesResponse = response.json()?;
    let text = parsed
        .content
        .into_iter()
        .find(|block| block.kind == "text" && !block.text.is_empty())
        .map(|block| block.text)
        .ok_or(ApiError::EmptyResponse)?;

    info!(chars = text.len(), model = %settings.model, "received draft from generation service");
    Ok(text)
}
