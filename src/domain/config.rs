//! Client configuration models.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::AppError;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "PROMPTENG_API_URL";
/// Base URL used when neither the config file nor the environment set one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Largest accepted request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Prompt backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL; endpoint paths are appended to it.
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout in seconds, between 1 and [`MAX_TIMEOUT_SECS`].
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    /// Apply an override for the base URL, ignoring blank values.
    pub fn with_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.url = url.trim().to_string();
        }
        self
    }

    /// Parse the configured base URL.
    pub fn base_url(&self) -> Result<Url, AppError> {
        Url::parse(&self.url)
            .map_err(|e| AppError::config_error(format!("Invalid API URL '{}': {}", self.url, e)))
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Result<Duration, AppError> {
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(AppError::config_error(format!(
                "Invalid api.timeout_secs {}: expected 1 to {} seconds",
                self.timeout_secs, MAX_TIMEOUT_SECS
            )));
        }
        Ok(Duration::from_secs(self.timeout_secs))
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}
