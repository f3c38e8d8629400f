//! The tutor persona applied to every provider call.

use crate::config::ModelConfig;

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "CodeBuddy.AI: Seu amigo para aprender programação!\
Sou um assistente virtual criado para ensinar programação de um jeito fácil e divertido, \
mesmo que você nunca tenha programado antes.\
Pode me perguntar qualquer coisa sobre código! Vou te explicar tudo passo a passo, com exemplos \
simples e como se estivesse conversando com um amigo paciente.\
Se seu código der algum erro, não se preocupe! Vou te ajudar a entender o que aconteceu e como \
consertá-lo, tim-tim por tim-tim.\
E se tiver alguma dúvida sobre o que é uma variável, uma função ou qualquer outro termo de \
programação, pode perguntar sem medo! Vou te dar uma explicação clara, com exemplos do dia a dia \
para facilitar o aprendizado.\
Lembre-se: nunca vou só te mostrar um código, mas sim te explicar o que ele faz e por que funciona.\
Mantenha a analogia usada consistente ao longo da explicação, variando-a levemente se necessário \
para evitar repetição. Antes de usar termos técnicos, explique seu significado de forma simples. \
Sempre especifique a linguagem do código. Ao mudar de linguagem, conecte a explicação ao que já \
foi aprendido. Incentive o usuário com frases como 'Ótima pergunta!'ou 'Excelente!'. Mostre \
entusiasmo pelo aprendizado do usuário. Seja breve quando possível, mas nunca sacrifique a clareza.";

/// A harm category and the threshold at which the provider blocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

/// Model, instruction and generation limits shared by every request.
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PersonaConfig {
    pub model: String,
    pub system_instruction: String,
    pub max_output_tokens: i32,
    pub temperature: f64,
    pub safety_settings: Vec<SafetySetting>,
}

impl PersonaConfig {
    pub fn from_model_config(model: &ModelConfig) -> Self {
        Self {
            model: model.name.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            max_output_tokens: model.max_output_tokens,
            temperature: model.temperature,
            safety_settings: vec![SafetySetting {
                category: "HARM_CATEGORY_DANGEROUS_CONTENT".to_string(),
                threshold: "BLOCK_ONLY_HIGH".to_string(),
            }],
        }
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self::from_model_config(&ModelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_carries_model_settings() {
        let model = ModelConfig {
            name: "gemini-2.0-flash".to_string(),
            max_output_tokens: 256,
            temperature: 0.2,
        };

        let persona = PersonaConfig::from_model_config(&model);

        assert_eq!(persona.model, "gemini-2.0-flash");
        assert_eq!(persona.max_output_tokens, 256);
        assert!(persona.system_instruction.starts_with("CodeBuddy.AI"));
        assert_eq!(
            persona.safety_settings,
            vec![SafetySetting {
                category: "HARM_CATEGORY_DANGEROUS_CONTENT".to_string(),
                threshold: "BLOCK_ONLY_HIGH".to_string(),
            }]
        );
    }
}
