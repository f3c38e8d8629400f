//! Gemini AI provider implementation.
//!
//! Implements single-shot and chat-style text generation against Google's
//! Gemini REST API (`generateContent`).

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use crate::models::{PersonaConfig, Turn};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the API key, so it never shows up in URLs or error text.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Candidate finish reasons for which the response text is withheld.
const BLOCKED_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "LANGUAGE",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
    pub timeout: Duration,
    pub persona: Arc<PersonaConfig>,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.persona.model,
            method
        )
    }

    /// Assemble the request body: history verbatim, then the new user turn,
    /// wrapped in the persona's instruction and limits.
    fn build_request<'a>(
        &'a self,
        history: &'a [Turn],
        message: &str,
    ) -> GenerateContentRequest<'a> {
        let persona = &self.config.persona;

        let mut contents: Vec<RequestContent<'a>> =
            history.iter().map(RequestContent::Passthrough).collect();
        contents.push(RequestContent::Message(Content {
            role: Some("user".to_string()),
            parts: vec![Part::text(message)],
        }));

        GenerateContentRequest {
            contents,
            system_instruction: Content {
                role: Some("system".to_string()),
                parts: vec![Part::text(&persona.system_instruction)],
            },
            generation_config: GenerationConfig {
                max_output_tokens: persona.max_output_tokens,
                temperature: persona.temperature,
            },
            safety_settings: persona
                .safety_settings
                .iter()
                .map(|s| SafetySetting {
                    category: &s.category,
                    threshold: &s.threshold,
                })
                .collect(),
        }
    }

    async fn generate_content(
        &self,
        history: &[Turn],
        message: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        let api_key = self.config.api_key.expose_secret();
        if api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "API_KEY missing, set GOOGLE_API_KEY".to_string(),
            ));
        }

        let request = self.build_request(history, message);

        tracing::debug!(
            model = %self.config.persona.model,
            prompt_len = message.len(),
            history_len = history.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited(error_text));
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_response(api_response)
    }
}

/// Turn a decoded API response into text, or the error a blocked response
/// stands for.
fn extract_response(
    api_response: GenerateContentResponse,
) -> Result<ProviderResponse, ProviderError> {
    let usage = api_response.usage_metadata.unwrap_or_default();

    let Some(candidate) = api_response.candidates.into_iter().next() else {
        if let Some(feedback) = api_response.prompt_feedback {
            return Err(ProviderError::Blocked(match feedback.block_reason {
                Some(reason) => format!("Response was blocked due to {}", reason),
                None => "Response was blocked".to_string(),
            }));
        }

        return Ok(ProviderResponse {
            text: String::new(),
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason: FinishReason::Other,
        });
    };

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|r| BLOCKED_FINISH_REASONS.contains(r))
    {
        return Err(ProviderError::Blocked(format!(
            "Candidate was blocked due to {}",
            reason
        )));
    }

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Complete,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some(_) => FinishReason::Other,
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(ProviderResponse {
        text,
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0),
        finish_reason,
    })
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.generate_content(&[], prompt).await
    }

    async fn send_message(
        &self,
        history: &[Turn],
        message: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        self.generate_content(history, message).await
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.expose_secret().trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    system_instruction: Content,
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting<'a>>,
}

/// Caller-supplied turns go out untouched; the new question is typed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestContent<'a> {
    Passthrough(&'a Turn),
    Message(Content),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: i32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct SafetySetting<'a> {
    category: &'a str,
    threshold: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}
