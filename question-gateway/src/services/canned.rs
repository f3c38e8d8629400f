//! Fixed answers for greetings and identity questions.
//!
//! Matched before the provider is contacted; a hit never costs a model call.

use std::collections::HashMap;

const GREETING_ANSWER: &str = "Olá! Sou o CodeBuddy.AI 🧑‍💻, seu amigo para aprender programação! \
Vou ajudá-lo a aprender a codificar de forma divertida e fácil. Vamos começar?";

const IDENTITY_ANSWER: &str = "Sou o CodeBuddy.AI 🧑‍💻, um assistente de inteligência artificial \
criado para ensinar programação para iniciantes de forma simples, clara e amigável. Meu objetivo \
é tornar o aprendizado de código uma experiência divertida e acessível para todos!";

/// Normalized phrase -> answer.
const CANNED_TABLE: &[(&str, &str)] = &[
    ("oi", GREETING_ANSWER),
    ("olá", GREETING_ANSWER),
    ("quem é você?", IDENTITY_ANSWER),
    ("quem voce é?", IDENTITY_ANSWER),
    ("fale sobre você", IDENTITY_ANSWER),
];

/// Exact-match lookup table over normalized questions.
#[derive(Debug, Clone)]
pub struct CannedResponses {
    answers: HashMap<String, &'static str>,
}

impl CannedResponses {
    pub fn new() -> Self {
        Self::from_entries(CANNED_TABLE.iter().copied())
    }

    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let answers = entries
            .into_iter()
            .map(|(phrase, answer)| (normalize(phrase), answer))
            .collect();
        Self { answers }
    }

    /// Fixed answer for `question`, if it is one of the known phrases.
    pub fn lookup(&self, question: &str) -> Option<&'static str> {
        self.answers.get(&normalize(question)).copied()
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim (whitespace and byte-order marks) and lowercase; used for matching
/// only.
pub fn normalize(question: &str) -> String {
    question
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_match_case_insensitively() {
        let canned = CannedResponses::new();
        assert_eq!(canned.lookup("oi"), Some(GREETING_ANSWER));
        assert_eq!(canned.lookup("  OI  "), Some(GREETING_ANSWER));
        assert_eq!(canned.lookup("Olá"), Some(GREETING_ANSWER));
        assert_eq!(canned.lookup("OLÁ\n"), Some(GREETING_ANSWER));
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        let canned = CannedResponses::new();
        assert_eq!(canned.lookup("\u{feff}oi"), Some(GREETING_ANSWER));
        assert_eq!(canned.lookup(" Olá\u{feff} "), Some(GREETING_ANSWER));
        assert_eq!(normalize("\u{feff} Fale Sobre Você \u{feff}"), "fale sobre você");
    }

    #[test]
    fn identity_phrases_share_one_answer() {
        let canned = CannedResponses::new();
        for phrase in ["Quem é você?", "quem voce é?", "Fale sobre você"] {
            assert_eq!(canned.lookup(phrase), Some(IDENTITY_ANSWER), "{phrase}");
        }
    }

    #[test]
    fn near_misses_fall_through() {
        let canned = CannedResponses::new();
        for phrase in ["oi!", "olá, tudo bem?", "quem é você", "quem e voce?", ""] {
            assert_eq!(canned.lookup(phrase), None, "{phrase}");
        }
    }
}
