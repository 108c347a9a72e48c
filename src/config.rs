use std::time::Duration;

use crate::cli::Cli;
use crate::poster::SMALL_POSTER_BASE;

/// Environment variable consulted when `--api-key` is missing or empty.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not provided. Use --api-key flag or set TMDB_API_KEY environment variable")]
    MissingApiKey,
}

/// Settings resolved once at startup and handed to the search pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub small_poster_base: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Config for the public TMDB endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: tmdb_client::DEFAULT_BASE_URL.to_string(),
            small_poster_base: SMALL_POSTER_BASE.to_string(),
            timeout: None,
        }
    }

    /// Build the config from parsed arguments. `env_api_key` is the value of
    /// [`API_KEY_ENV`], looked up by the caller.
    pub fn from_cli(cli: &Cli, env_api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = resolve_api_key(cli.api_key.clone(), env_api_key)?;
        Ok(Self {
            api_key,
            api_url: cli.api_url.clone(),
            small_poster_base: cli.image_url.clone(),
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// The flag wins when non-empty, then the environment.
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
) -> Result<String, ConfigError> {
    flag.filter(|key| !key.is_empty())
        .or_else(|| env.filter(|key| !key.is_empty()))
        .ok_or(ConfigError::MissingApiKey)
}
