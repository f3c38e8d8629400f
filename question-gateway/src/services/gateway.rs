//! The question gateway: validation, canned shortcut, provider delegation.

use crate::error::GatewayError;
use crate::models::{Answer, Turn};
use crate::services::canned::CannedResponses;
use crate::services::providers::TextProvider;
use std::sync::Arc;
use std::time::Instant;

/// Answers questions, either from the canned table or through the provider.
///
/// Holds no per-request state; one instance serves every request.
pub struct QuestionGateway {
    provider: Arc<dyn TextProvider>,
    canned: CannedResponses,
}

impl QuestionGateway {
    pub fn new(provider: Arc<dyn TextProvider>, canned: CannedResponses) -> Self {
        Self { provider, canned }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Answer `question`, using `history` as conversation context when given.
    ///
    /// The question is forwarded exactly as received; trimming and
    /// lowercasing only apply to the canned lookup.
    pub async fn answer_question(
        &self,
        question: Option<&str>,
        history: Option<&[Turn]>,
    ) -> Result<Answer, GatewayError> {
        let question = match question {
            Some(q) if !q.trim().is_empty() => q,
            _ => return Err(GatewayError::Validation),
        };

        if let Some(answer) = self.canned.lookup(question) {
            return Ok(Answer::canned(answer));
        }

        let started = Instant::now();
        let result = match history {
            Some(turns) => self.provider.send_message(turns, question).await,
            None => self.provider.generate(question).await,
        };

        match result {
            Ok(response) => {
                tracing::debug!(
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    finish_reason = ?response.finish_reason,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Provider call completed"
                );
                Ok(Answer::generated(response.text))
            }
            Err(e) => Err(GatewayError::from(e)),
        }
    }
}
