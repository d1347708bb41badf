//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, GenerateRequest};

use super::client::{error_for_status, GeminiClient};

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate_content(&self, request: &GenerateRequest) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(request);
        let url = self.api_url();

        debug!(
            model = %self.model(),
            turns = request.contents.len(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
