//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::{AiError, AiResponse, GenerateRequest, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let mut generation = serde_json::json!({
            "temperature": request.generation.temperature,
        });
        if let Some(max) = request.generation.max_output_tokens {
            generation["maxOutputTokens"] = serde_json::json!(max);
        }

        let mut body = serde_json::json!({
            "contents": request.contents,
            "generationConfig": generation,
        });

        if let Some(ref system) = request.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// A response without candidates (e.g. a blocked prompt) yields empty
    /// content rather than an error.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        if !json.is_object() {
            return Err(AiError::ParseError("response is not a JSON object".to_string()));
        }

        let mut content = String::new();
        match json["candidates"].as_array().and_then(|c| c.first()) {
            Some(first) => {
                let parts = first["content"]["parts"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default();
                for part in &parts {
                    if part["thought"].as_bool() == Some(true) {
                        continue;
                    }
                    if let Some(text) = part["text"].as_str() {
                        content.push_str(text);
                    }
                }
            }
            None => {
                debug!(
                    block_reason = json["promptFeedback"]["blockReason"].as_str().unwrap_or("none"),
                    "Gemini response had no candidates"
                );
            }
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

/// Map a non-success HTTP status and its body to an `AiError`.
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> AiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::NOT_FOUND => AiError::ModelNotFound(format!("HTTP {status}: {message}")),
        StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        _ => AiError::ApiError(format!("HTTP {status}: {message}")),
    }
}
