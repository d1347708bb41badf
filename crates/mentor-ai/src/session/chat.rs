//! Async send for ChatSession.

use tracing::debug;

use crate::{AiError, Content, GenerateRequest, Part};

use super::manager::ChatSession;

impl ChatSession {
    /// Send one user turn and return the model's text.
    ///
    /// History is only extended when the call succeeds, so a failed turn
    /// leaves the session exactly as it was.
    pub async fn send(&mut self, parts: Vec<Part>) -> Result<String, AiError> {
        let turn = Content::user(parts);

        let mut contents = self.history.clone();
        contents.push(turn.clone());

        let request = GenerateRequest {
            system_instruction: Some(self.system_instruction.clone()),
            contents,
            generation: self.generation,
        };

        let response = self.client.generate_content(&request).await?;
        self.tracker.record(&response.usage);

        debug!(
            session = %self.id,
            chars = response.content.len(),
            "chat turn completed"
        );

        self.history.push(turn);
        self.history.push(Content::model(response.content.clone()));
        Ok(response.content)
    }
}
