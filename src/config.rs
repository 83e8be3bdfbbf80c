use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: i64 = 5000;
const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 30;

/// Environment variables that override file settings, mapped to config keys.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("AI_API", "relay.ai_api"),
    ("TRANSLATE_API", "relay.translate_api"),
    ("REQUEST_TIMEOUT_SECS", "relay.request_timeout_secs"),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid request timeout: must be at least one second")]
    InvalidTimeout,

    #[error("Invalid URL for {key}: {value}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream endpoints the chat relay talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// AI responder URL. Required for chat; checked per request, not at startup.
    #[serde(default)]
    pub ai_api: Option<String>,
    /// Translator URL. Its presence alone switches translation on.
    #[serde(default)]
    pub translate_api: Option<String>,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load from `.env`, the optional config file and the process environment.
    ///
    /// The file is `CONFIG_PATH` when set, otherwise `conf.{yaml,json,toml}`
    /// in the working directory if one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = std::env::var("CONFIG_PATH").ok();
        Self::load_with(path.as_deref(), |name| std::env::var(name).ok())
    }

    /// Layered load with an injectable environment lookup.
    pub fn load_with<F>(path: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match path {
            Some(path) => ::config::File::with_name(path).required(true),
            None => ::config::File::with_name("conf").required(false),
        };

        let mut builder = ::config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("relay.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(file);

        for &(var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, env(var))?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.relay.validate()?;
        Ok(config)
    }
}

impl RelayConfig {
    pub fn ai_endpoint(&self) -> Option<&str> {
        non_blank(self.ai_api.as_deref())
    }

    pub fn translate_endpoint(&self) -> Option<&str> {
        non_blank(self.translate_api.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        check_url("AI_API", self.ai_endpoint())?;
        check_url("TRANSLATE_API", self.translate_endpoint())?;
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            ai_api: None,
            translate_api: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS as u64,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_url(key: &'static str, value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
            Err(ConfigError::InvalidUrl {
                key,
                value: url.to_string(),
            })
        }
        _ => Ok(()),
    }
}
