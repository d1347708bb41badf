//! Failure classification for chat sends.

use crate::AiError;

use super::prompts;

/// What went wrong with a send, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No API key was resolved; nothing was sent.
    Disconnected,
    /// The model (or session) is gone. The session must be rebuilt.
    ModelUnavailable,
    /// Too many requests; transient.
    RateLimited,
    /// Anything else.
    Generic,
}

impl FailureKind {
    /// Whether the stored session must be dropped after this failure.
    pub fn resets_session(&self) -> bool {
        matches!(self, FailureKind::ModelUnavailable)
    }

    /// The message shown to the user.
    pub fn message(&self, model: &str) -> String {
        match self {
            FailureKind::Disconnected => prompts::DISCONNECTED.to_string(),
            FailureKind::ModelUnavailable => prompts::model_unavailable(model),
            FailureKind::RateLimited => prompts::RATE_LIMITED.to_string(),
            FailureKind::Generic => prompts::GENERIC_FAILURE.to_string(),
        }
    }
}

/// Classify an error from the API boundary.
///
/// Structured variants are trusted first; everything else falls back to
/// `classify_message` on the error text.
pub fn classify(err: &AiError) -> FailureKind {
    match err {
        AiError::NotConfigured => FailureKind::Disconnected,
        AiError::ModelNotFound(_) => FailureKind::ModelUnavailable,
        AiError::RateLimited => FailureKind::RateLimited,
        other => classify_message(&other.to_string()),
    }
}

/// Substring classification of a raw error text. Not-found beats
/// rate-limited when both appear.
pub fn classify_message(raw: &str) -> FailureKind {
    let text = raw.to_lowercase();
    if text.contains("404") || text.contains("not found") {
        FailureKind::ModelUnavailable
    } else if text.contains("429") {
        FailureKind::RateLimited
    } else {
        FailureKind::Generic
    }
}
