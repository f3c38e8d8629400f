//! question-gateway: relays chat questions to a Gemini model under a fixed
//! tutor persona.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
