use std::env::vars;

use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Host serving the users resource.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
    #[error("USERBOARD_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    userboard_api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `USERBOARD_API_BASE_URL`, falling back to the public endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(env: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(env).map_err(|err| ConfigError::Env(err.to_string()))?;

        match raw.userboard_api_base_url {
            Some(url) if url.trim().is_empty() => Err(ConfigError::EmptyBaseUrl),
            Some(url) => {
                info!("Using USERBOARD_API_BASE_URL: {url}");
                Ok(Self::new(url))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
