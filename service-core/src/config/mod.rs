use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// `PORT` if it holds anything, otherwise the built-in default.
fn port_from_env(raw: Option<String>) -> String {
    raw.filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}

impl Config {
    /// Load the base service configuration.
    ///
    /// Precedence, lowest first: built-in default, `PORT`, an optional
    /// `configuration.*` file, then `APP__*` variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", port_from_env(env::var("PORT").ok()))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
