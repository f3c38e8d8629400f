use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One prior conversation turn. Opaque here and forwarded to the provider
/// exactly as the caller sent it.
pub type Turn = Value;

/// Body of `POST /api/perguntar`.
///
/// Both fields are kept as raw JSON so that wrongly typed values can be
/// handled leniently instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub pergunta: Option<Value>,
    #[serde(default)]
    pub historico: Option<Value>,
}

impl AskRequest {
    /// The question, if it was sent as a JSON string.
    pub fn question(&self) -> Option<&str> {
        self.pergunta.as_ref().and_then(Value::as_str)
    }

    /// Prior turns, only when `historico` is an array. Any other shape counts
    /// as no history at all.
    pub fn history(&self) -> Option<&[Turn]> {
        self.historico
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub resposta: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub erro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<String>,
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Canned,
    Provider,
}

impl AnswerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerSource::Canned => "canned",
            AnswerSource::Provider => "provider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

impl Answer {
    pub fn canned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Canned,
        }
    }

    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> AskRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn question_must_be_a_string() {
        assert_eq!(parse(json!({"pergunta": "oi"})).question(), Some("oi"));
        assert_eq!(parse(json!({"pergunta": 42})).question(), None);
        assert_eq!(parse(json!({"pergunta": null})).question(), None);
        assert_eq!(parse(json!({})).question(), None);
    }

    #[test]
    fn non_array_history_is_ignored() {
        assert!(parse(json!({"historico": "texto"})).history().is_none());
        assert!(parse(json!({"historico": 7})).history().is_none());
        assert!(parse(json!({"historico": {"role": "user"}})).history().is_none());
    }

    #[test]
    fn empty_array_history_is_still_history() {
        let request = parse(json!({"historico": []}));
        assert_eq!(request.history().map(<[Turn]>::len), Some(0));
    }

    #[test]
    fn error_response_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse {
            erro: "x".to_string(),
            detalhes: None,
        })
        .unwrap();
        assert_eq!(body, json!({"erro": "x"}));
    }
}
