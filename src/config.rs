//! Application configuration loaded from environment variables.
//!
//! The backend base URL and the token-file location are resolved once at
//! startup; everything else about the backend is opaque to the client.

use std::env;
use std::path::PathBuf;

/// Default backend base URL when `FITNESS_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://fitness-tracker-2025.vercel.app/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the fitness REST backend (no trailing slash)
    pub api_base_url: String,
    /// Path of the persisted token file
    pub credentials_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both variables are optional; defaults point at the hosted backend
    /// and the platform config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("FITNESS_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let credentials_path = match env::var("FITNESS_CREDENTIALS_PATH") {
            Ok(p) => PathBuf::from(p),
            Err(_) => default_credentials_path()?,
        };

        Ok(Self {
            api_base_url,
            credentials_path,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            credentials_path: PathBuf::from("credentials.toml"),
        }
    }
}

/// Resolve the default token file path under the platform config directory.
///
/// Falls back to `~/.config` when the platform lookup fails.
fn default_credentials_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("fitness-tracker").join("credentials.toml"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Could not determine a config directory for the token file")]
    NoConfigDir,
}
