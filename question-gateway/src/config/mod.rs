use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini REST endpoint used when `GEMINI_API_BASE` is not set.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 1000;
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Empty when `GOOGLE_API_KEY` is unset; requests then fail with a
    /// credential error instead of the process refusing to start.
    pub api_key: Secret<String>,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model identifier (e.g., gemini-1.5-flash)
    pub name: String,
    pub max_output_tokens: i32,
    pub temperature: f64,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("GOOGLE_API_KEY is not set; provider calls will fail");
        }

        Ok(GatewayConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(api_key),
                api_base: get_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                timeout_secs: get_env("GEMINI_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
            model: ModelConfig {
                name: get_env("GEMINI_MODEL", DEFAULT_MODEL),
                max_output_tokens: get_env(
                    "GEMINI_MAX_OUTPUT_TOKENS",
                    &DEFAULT_MAX_OUTPUT_TOKENS.to_string(),
                )
                .parse()
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
                temperature: get_env("GEMINI_TEMPERATURE", &DEFAULT_TEMPERATURE.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_TEMPERATURE),
            },
        })
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Value of `key`, or `default` when it is unset or blank.
fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
