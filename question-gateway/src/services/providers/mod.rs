//! AI provider abstractions and implementations.
//!
//! The gateway talks to the model through [`TextProvider`], so the Gemini
//! backend can be swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use crate::models::Turn;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// The `Display` text is what callers see as the raw error detail, so it must
/// never contain the API key.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("{0}")]
    ApiError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Blocked(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text, empty when the model produced none.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Single-shot generation with no prior context.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Chat-style generation: a session seeded with `history`, then `message`
    /// as the newest user turn. The session lives for this call only.
    async fn send_message(
        &self,
        history: &[Turn],
        message: &str,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
