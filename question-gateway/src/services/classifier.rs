//! Coarse classification of provider failures.
//!
//! The provider error is opaque text, so categories are picked by substring.
//! Rules are checked in order; the first match wins.

/// User-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    SafetyBlocked,
    Credential,
    Generation,
}

impl ErrorCategory {
    /// Message shown to the end user.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorCategory::SafetyBlocked => "A pergunta foi bloqueada pelos filtros de segurança",
            ErrorCategory::Credential => "Problema com a chave da API",
            ErrorCategory::Generation => "Erro ao gerar resposta",
        }
    }
}

/// (substring, category), evaluated top-down.
pub const CLASSIFICATION_RULES: &[(&str, ErrorCategory)] = &[
    ("SAFETY", ErrorCategory::SafetyBlocked),
    ("API_KEY", ErrorCategory::Credential),
];

/// Category for `message`, falling back to [`ErrorCategory::Generation`].
pub fn classify(message: &str) -> ErrorCategory {
    CLASSIFICATION_RULES
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or(ErrorCategory::Generation)
}
