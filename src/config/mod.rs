//! Configuration management

use std::env;

use tracing::debug;

use crate::error::{Result, StatuspageError};

/// Environment variable holding the fallback API key
pub const API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "STATUSPAGE_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.statuspage.io/v1";

/// Per-invocation configuration passed down to the request layer
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved API key
    pub api_key: String,

    /// API base URL, without a trailing slash
    pub api_url: String,
}

impl Config {
    /// Load configuration from the `--api-key` flag and the environment
    pub fn load(api_key_flag: Option<&str>) -> Result<Self> {
        let api_key_env = env::var(API_KEY_ENV).ok();
        let api_key = resolve_api_key(api_key_flag, api_key_env.as_deref())?;

        let api_url_env = env::var(API_URL_ENV).ok();

        Ok(Self {
            api_key,
            api_url: resolve_api_url(api_url_env.as_deref()),
        })
    }
}

/// Base URL from the override, or the public API when unset or blank. No trailing slash.
pub fn resolve_api_url(env: Option<&str>) -> String {
    let url = env
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL);

    url.trim_end_matches('/').to_string()
}

/// Pick the API key: a non-empty flag wins over a non-empty environment value.
pub fn resolve_api_key(flag: Option<&str>, env: Option<&str>) -> Result<String> {
    if let Some(key) = flag.filter(|k| !k.is_empty()) {
        debug!("Using API key from --api-key");
        return Ok(key.to_string());
    }

    if let Some(key) = env.filter(|k| !k.is_empty()) {
        debug!("Using API key from {}", API_KEY_ENV);
        return Ok(key.to_string());
    }

    Err(StatuspageError::MissingCredential)
}
