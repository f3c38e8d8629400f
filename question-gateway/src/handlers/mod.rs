//! HTTP handlers for the question gateway.

pub mod health;
pub mod question;

pub use health::{health_check, readiness_check};
pub use question::ask_question;
