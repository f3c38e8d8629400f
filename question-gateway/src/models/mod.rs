//! Domain models for the question gateway.

pub mod persona;
pub mod question;

pub use persona::{PersonaConfig, SafetySetting};
pub use question::{Answer, AnswerSource, AskRequest, AskResponse, ErrorResponse, Turn};
