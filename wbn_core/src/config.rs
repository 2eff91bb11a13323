//! Configuration read once at process start.

use tracing::Level;

use crate::{
    council_client::{DEFAULT_PROPERTY_NUMBER, DEFAULT_RADIUS},
    Error,
};

pub static ENV_LOG_LEVEL: &str = "logLevel";
pub static ENV_RECIPIENT: &str = "email";
pub static ENV_API_KEY: &str = "apiKey";
pub static ENV_PROPERTY_NUMBER: &str = "propnum";
pub static ENV_RADIUS: &str = "radius";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
    /// The Pushbullet account the note is pushed to.
    pub recipient: String,
    /// The parameter store name of the Pushbullet access token.
    pub api_key_parameter: String,
    pub property_number: String,
    pub radius: u32,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration from any key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("missing environment variable {key}")))
        };
        let radius = match lookup(ENV_RADIUS) {
            Some(radius) => radius
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid {ENV_RADIUS} {radius:?}")))?,
            None => DEFAULT_RADIUS,
        };
        Ok(Self {
            log_level: level_from_name(lookup(ENV_LOG_LEVEL).as_deref().unwrap_or_default()),
            recipient: required(ENV_RECIPIENT)?,
            api_key_parameter: required(ENV_API_KEY)?,
            property_number: lookup(ENV_PROPERTY_NUMBER)
                .unwrap_or_else(|| DEFAULT_PROPERTY_NUMBER.to_string()),
            radius,
        })
    }
}

/// Map a log level name to a level; unknown names mean errors only.
pub fn level_from_name(name: &str) -> Level {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        _ => Level::ERROR,
    }
}
