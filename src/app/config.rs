//! Configuration and state-directory resolution.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{API_URL_ENV, ApiConfig, AppError, ClientConfig};

const APP_DIR: &str = "prompteng";
const CONFIG_FILE: &str = "config.toml";
const STATE_DIR: &str = "state";

/// Per-user directories used by the client.
#[derive(Debug, Clone)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Use a custom configuration root.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve `$HOME/.config/prompteng`.
    pub fn from_home() -> Result<Self, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        Ok(Self::with_root(PathBuf::from(home).join(".config").join(APP_DIR)))
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }
}

/// Load `config.toml`, falling back to defaults when the file is absent.
pub fn load_config(paths: &AppPaths) -> Result<ClientConfig, AppError> {
    match fs::read_to_string(paths.config_file()) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(err) => Err(err.into()),
    }
}

/// Resolve API settings: config file first, then the environment override.
pub fn resolve_api_config(paths: &AppPaths) -> Result<ApiConfig, AppError> {
    let config = load_config(paths)?;
    let api = config.api.with_url_override(std::env::var(API_URL_ENV).ok());
    api.base_url()?;
    api.timeout()?;
    tracing::debug!(url = %api.url, timeout_secs = api.timeout_secs, "resolved API configuration");
    Ok(api)
}
