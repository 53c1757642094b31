//! Application configuration loaded from environment variables.
//!
//! Variables use the `DISCORD_BOT_` prefix, e.g. `DISCORD_BOT_TOKEN` and
//! `DISCORD_BOT_LOG_LEVEL`. A `.env` file is read first when present.

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "DISCORD_BOT";

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    /// Bot authentication token
    pub token: SecretString,

    /// Log level
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    token: Option<SecretString>,

    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::build(environment())
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(environment().source(Some(vars)))
    }

    fn build(source: config::Environment) -> Result<Self> {
        let raw: RawConfig = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        let token = match raw.token {
            Some(token) if !token.expose_secret().trim().is_empty() => token,
            _ => bail!(
                "{ENV_PREFIX}_TOKEN is not set. \
                 Create a .env file containing {ENV_PREFIX}_TOKEN=<your token>"
            ),
        };

        Ok(Self {
            token,
            log_level: raw.log_level,
        })
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        // Tokens are opaque strings; never coerce them to numbers.
        .try_parsing(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_loads_token_and_default_level() {
        let config = Config::from_env_map(vars(&[("DISCORD_BOT_TOKEN", "abc.def.ghi")])).unwrap();

        assert_eq!(config.token.expose_secret(), "abc.def.ghi");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_loads_log_level() {
        let config = Config::from_env_map(vars(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("DISCORD_BOT_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = Config::from_env_map(vars(&[])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_BOT_TOKEN is not set"));
    }

    #[test]
    fn test_blank_token_is_fatal() {
        let err = Config::from_env_map(vars(&[("DISCORD_BOT_TOKEN", "   ")])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_BOT_TOKEN is not set"));
    }

    #[test]
    fn test_unrelated_variables_ignored() {
        let config = Config::from_env_map(vars(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("DISCORD_TOKEN", "other"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();

        assert_eq!(config.token.expose_secret(), "abc");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_env_map(vars(&[("DISCORD_BOT_TOKEN", "super-secret")])).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
