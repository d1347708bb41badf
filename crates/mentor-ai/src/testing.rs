//! Test doubles for `AiClient`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiClient, AiError, AiResponse, GenerateRequest, TokenUsage};

/// Replays queued results in order and records every request it receives.
/// An exhausted script answers with an empty reply.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    script: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_reply(&self, text: &str) {
        self.push_reply_with_usage(text, TokenUsage::default());
    }

    pub(crate) fn push_reply_with_usage(&self, text: &str, usage: TokenUsage) {
        self.script.lock().unwrap().push_back(Ok(AiResponse {
            content: text.to_string(),
            usage,
        }));
    }

    pub(crate) fn push_error(&self, error: AiError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn generate_content(&self, request: &GenerateRequest) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AiResponse::default()))
    }
}
