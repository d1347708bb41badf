//! ChatSession struct and history accessors.

use std::sync::Arc;

use uuid::Uuid;

use crate::token_tracker::TokenTracker;
use crate::{AiClient, Content, GenerationConfig};

/// A conversation bound to one client, system prompt, and sampling config.
pub struct ChatSession {
    /// Unique id, fresh for every constructed session.
    pub(super) id: Uuid,
    /// Backend the session talks to.
    pub(super) client: Arc<dyn AiClient>,
    /// System instruction sent with every call.
    pub(super) system_instruction: String,
    pub(super) generation: GenerationConfig,
    /// Completed turns, alternating user/model.
    pub(super) history: Vec<Content>,
    pub(super) tracker: TokenTracker,
}

impl ChatSession {
    pub fn new(
        client: Arc<dyn AiClient>,
        system_instruction: impl Into<String>,
        generation: GenerationConfig,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            system_instruction: system_instruction.into(),
            generation,
            history: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    /// Seed the session with prior turns.
    pub fn with_history(mut self, history: Vec<Content>) -> Self {
        self.history = history;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the full conversation history.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn generation(&self) -> GenerationConfig {
        self.generation
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of completed request/response exchanges.
    pub fn turn_count(&self) -> usize {
        self.history.len() / 2
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("turns", &self.turn_count())
            .finish()
    }
}
