//! Mentor: session ownership, message dispatch, and mind maps.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL};
use crate::session::ChatSession;
use crate::{AiClient, AiError, GenerateRequest, GenerationConfig, InlineImage, Part};

use super::classify::{classify, FailureKind};
use super::prompts;

/// Builds a backend client from an API key. Invoked once per chat session
/// and once per mind map.
pub type ClientFactory = Arc<dyn Fn(&str) -> Result<Arc<dyn AiClient>, AiError> + Send + Sync>;

/// Factory producing `GeminiClient`s for `model`.
pub fn gemini_factory(model: impl Into<String>) -> ClientFactory {
    let model = model.into();
    Arc::new(move |api_key: &str| -> Result<Arc<dyn AiClient>, AiError> {
        let client = GeminiClient::new(GeminiConfig::new(api_key).with_model(model.clone()))?;
        Ok(Arc::new(client) as Arc<dyn AiClient>)
    })
}

/// Fixed configuration every session is created with.
#[derive(Debug, Clone)]
pub struct MentorSettings {
    pub model: String,
    pub system_instruction: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub mind_map_temperature: f64,
}

impl Default for MentorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_instruction: prompts::SYSTEM_INSTRUCTION.to_string(),
            temperature: 0.7,
            max_output_tokens: 2000,
            mind_map_temperature: 0.4,
        }
    }
}

impl MentorSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_mind_map_temperature(mut self, temperature: f64) -> Self {
        self.mind_map_temperature = temperature;
        self
    }

    fn chat_generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: Some(self.max_output_tokens),
        }
    }
}

/// Owns at most one chat session and never lets an error reach the caller
/// of `send_message`.
pub struct Mentor {
    api_key: Option<String>,
    settings: MentorSettings,
    factory: ClientFactory,
    session: Option<ChatSession>,
}

impl std::fmt::Debug for Mentor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mentor")
            .field("connected", &self.is_connected())
            .field("settings", &self.settings)
            .field("session", &self.session)
            .finish()
    }
}

impl Mentor {
    /// A mentor talking to Gemini. `api_key = None` yields a disconnected mentor.
    pub fn new(api_key: Option<String>, settings: MentorSettings) -> Self {
        let factory = gemini_factory(settings.model.clone());
        Self::with_factory(api_key, settings, factory)
    }

    /// A mentor with a custom client factory.
    pub fn with_factory(
        api_key: Option<String>,
        settings: MentorSettings,
        factory: ClientFactory,
    ) -> Self {
        Self {
            api_key,
            settings,
            factory,
            session: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn settings(&self) -> &MentorSettings {
        &self.settings
    }

    /// The live session, if one has been created.
    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    /// Drop the current session; the next send starts with empty history.
    pub fn reset_session(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session = %session.id(), turns = session.turn_count(), "chat session reset");
        }
    }

    fn ensure_session(&mut self) -> Result<&mut ChatSession, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::NotConfigured)?;

        let session = match self.session.take() {
            Some(session) => session,
            None => {
                let client = (self.factory)(api_key)?;
                let session = ChatSession::new(
                    client,
                    self.settings.system_instruction.clone(),
                    self.settings.chat_generation(),
                );
                info!(session = %session.id(), model = %self.settings.model, "chat session created");
                session
            }
        };

        Ok(self.session.insert(session))
    }

    /// Send a message and return the raw reply text (possibly empty) or the
    /// classified failure.
    pub async fn try_send(
        &mut self,
        text: &str,
        image: Option<InlineImage>,
    ) -> Result<String, FailureKind> {
        if !self.is_connected() {
            return Err(FailureKind::Disconnected);
        }

        let parts = assemble_parts(text, image);
        let result = match self.ensure_session() {
            Ok(session) => session.send(parts).await,
            Err(e) => Err(e),
        };

        result.map_err(|err| {
            let kind = classify(&err);
            error!(error = %err, ?kind, "mentor request failed");
            if kind.resets_session() {
                self.session = None;
            }
            kind
        })
    }

    /// Send a message and always get something displayable back.
    pub async fn send_message(&mut self, text: &str, image: Option<InlineImage>) -> String {
        match self.try_send(text, image).await {
            Ok(reply) if reply.is_empty() => prompts::EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(kind) => kind.message(&self.settings.model),
        }
    }

    /// Generate an ASCII mind map about `topic`.
    ///
    /// Independent of the chat session. Returns `None` when disconnected,
    /// when `topic` is blank, when the reply is empty, or on any failure.
    pub async fn generate_mind_map(&self, topic: &str) -> Option<String> {
        let api_key = self.api_key.as_deref()?;
        let topic = topic.trim();
        if topic.is_empty() {
            debug!("mind map skipped: empty topic");
            return None;
        }

        let request = GenerateRequest::single_turn(
            prompts::mind_map_prompt(topic),
            self.settings.mind_map_temperature,
        );

        let result = match (self.factory)(api_key) {
            Ok(client) => client.generate_content(&request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) if response.content.is_empty() => None,
            Ok(response) => Some(response.content),
            Err(e) => {
                warn!(error = %e, "mind map generation failed");
                None
            }
        }
    }
}

/// Image first, then text.
fn assemble_parts(text: &str, image: Option<InlineImage>) -> Vec<Part> {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = image {
        parts.push(Part::InlineData(image));
    }
    parts.push(Part::Text(text.to_string()));
    parts
}
