//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides (`SPINEL_API_URL`, `SPINEL_DATA_DIR`) so scripted runs and
//! tests can redirect the backend and the data directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

mod ads;

pub use ads::{AdsConfig, RetryConfig, SimConfig};

/// Home directory for all spinel data (`~/.spinel/`).
#[must_use]
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".spinel")
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub store: StoreConfig,
    pub ads: AdsConfig,
    pub logging: LoggingConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the name-generation API (the `/api` prefix is appended
    /// per request).
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.spinel.app".into(),
            timeout_secs: 30,
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the store document. Defaults to `~/.spinel`.
    pub data_dir: Option<PathBuf>,
    /// Keep saved names on the backend instead of the local document.
    /// The language preference always stays local.
    pub remote_saved_names: bool,
}

impl StoreConfig {
    /// The effective data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_home)
    }

    /// Path of the store document inside the data directory.
    #[must_use]
    pub fn store_file(&self) -> PathBuf {
        self.resolved_data_dir().join("store.json")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` wins over the configured level when set.
    pub fn init(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        // Logs go to stderr; stdout belongs to the prompt UI.
        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// Fresh installs have no config file; defaults plus environment
    /// overrides are enough to run.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SPINEL_API_URL") {
            if !url.is_empty() {
                self.backend.api_url = url;
            }
        }
        if let Ok(dir) = std::env::var("SPINEL_DATA_DIR") {
            if !dir.is_empty() {
                self.store.data_dir = Some(PathBuf::from(dir));
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.backend.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "backend.api_url",
            }
            .into());
        }
        if let Err(e) = url::Url::parse(&self.backend.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "backend.api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }

        self.ads.validate()?;

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
