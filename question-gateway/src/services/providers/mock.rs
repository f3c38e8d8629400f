//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use crate::models::Turn;
use async_trait::async_trait;
use std::sync::Mutex;

/// How the mock answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the same text.
    Reply(String),
    /// Return `Mock response for: <prompt>`.
    Echo,
    /// Fail with an API error carrying this message.
    Fail(String),
}

/// A call the gateway made, as the provider saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Generate { prompt: String },
    SendMessage { history: Vec<Turn>, message: String },
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(message.into()))
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    fn respond(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let text = match &self.behavior {
            MockBehavior::Reply(text) => text.clone(),
            MockBehavior::Echo => format!("Mock response for: {}", prompt),
            MockBehavior::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.record(RecordedCall::Generate {
            prompt: prompt.to_string(),
        });

        // Yield so concurrent requests actually interleave
        tokio::task::yield_now().await;

        self.respond(prompt)
    }

    async fn send_message(
        &self,
        history: &[Turn],
        message: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        self.record(RecordedCall::SendMessage {
            history: history.to_vec(),
            message: message.to_string(),
        });

        tokio::task::yield_now().await;

        self.respond(message)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            MockBehavior::Fail(message) => Err(ProviderError::NotConfigured(message.clone())),
            _ => Ok(()),
        }
    }
}
