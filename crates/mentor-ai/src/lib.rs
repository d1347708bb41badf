//! AI engine for Mentor.
//!
//! Provides the Gemini API client and the conversation layer on top of it:
//! - `ChatSession`: one conversation bound to a system prompt and settings
//! - `Mentor`: owns at most one session, classifies failures into
//!   user-facing messages, and generates one-shot mind maps
//! - Hidden achievement tags emitted by the mentor persona

pub mod gemini;
pub mod mentor;
pub mod session;
pub mod token_tracker;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use base64::Engine;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mentor::{
    classify, classify_message, extract_achievements, gemini_factory, Achievement, ClientFactory,
    FailureKind, Mentor, MentorSettings,
};
pub use session::ChatSession;
pub use token_tracker::TokenTracker;

/// A generative-language backend.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Run a single `generateContent` call.
    async fn generate_content(&self, request: &GenerateRequest) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// Inline image sent alongside a message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(bytes),
        )
    }
}

/// One piece of a turn. Serializes to the Gemini part shape
/// (`{"text": ..}` or `{"inlineData": {..}}`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(InlineImage),
}

/// A single turn in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::InlineData(_) => None,
            })
            .collect()
    }
}

/// Sampling parameters for one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

/// Everything a backend needs for one `generateContent` call.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub contents: Vec<Content>,
    pub generation: GenerationConfig,
}

impl GenerateRequest {
    /// A non-conversational request with a single user prompt.
    pub fn single_turn(prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            system_instruction: None,
            contents: vec![Content::user(vec![Part::Text(prompt.into())])],
            generation: GenerationConfig {
                temperature,
                max_output_tokens: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not configured")]
    NotConfigured,
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
