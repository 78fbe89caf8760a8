//! Configuration System
//!
//! Loads client configuration from a TOML file with environment variable
//! overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::DEFAULT_API_BASE;
use crate::i18n::Language;
use crate::storage::FileStorage;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the analytics query
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,

    /// Timeout for every other request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_query_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_timeout_secs: default_query_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Client-side storage location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStorage::default_path)
    }
}

/// Display settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Used until a preference has been stored
    #[serde(default)]
    pub default_language: Language,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations, falling back to defaults
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("datavision").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("DATAVISION_API_URL") {
            self.api.base_url = url;
        }
        if let Some(path) = var("DATAVISION_STORAGE_PATH") {
            self.storage.path = Some(PathBuf::from(path));
        }
        if let Some(level) = var("DATAVISION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DATAVISION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DataVision Configuration
#
# Environment variables override these settings:
# - DATAVISION_API_URL
# - DATAVISION_STORAGE_PATH
# - DATAVISION_LOG_LEVEL
# - DATAVISION_LOG_FORMAT

[api]
# Backend base URL
base_url = "http://localhost:5000"

# Timeout for the work code count query (seconds)
query_timeout_secs = 10

# Timeout for login and session requests (seconds)
request_timeout_secs = 30

[storage]
# File holding the session token, cached user name and language
# path = "~/.local/share/datavision/storage.json"

[ui]
# Language until one is chosen: en or de
default_language = "en"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
