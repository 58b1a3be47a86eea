//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the bot token may instead come
//! from the `TELEGRAM_BOT_TOKEN` environment variable, which wins when set.
//!
//! ```toml
//! telegram_token = "123456:ABC"
//! target = "@dolarbrou"
//! admin_id = 123456789
//! interval = 300000
//!
//! [detector]
//! threshold = 0.05
//!
//! [cache]
//! path = "cache.json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::message::MessageConfig;
use super::source::SourceConfig;
use crate::application::detector::DEFAULT_THRESHOLD;
use crate::error::{ConfigError, Result};
use crate::port::Destination;

/// Environment variable overriding `telegram_token`.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

const DEFAULT_INTERVAL_MS: u64 = 300_000;

/// Change detection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum absolute move on either side that triggers an update.
    pub threshold: Decimal,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Rate cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cache.json"),
        }
    }
}

/// On-disk shape, before required fields are checked.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    telegram_token: Option<String>,
    #[serde(default)]
    target: Option<Destination>,
    #[serde(default)]
    admin_id: Option<Destination>,
    #[serde(default)]
    interval: Option<u64>,
    #[serde(default)]
    source: SourceConfig,
    #[serde(default)]
    detector: DetectorConfig,
    #[serde(default)]
    cache: CacheConfig,
    #[serde(default)]
    message: MessageConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot API token.
    pub telegram_token: String,
    /// Audience for rate updates.
    pub target: Destination,
    /// Operator chat for error alerts.
    pub admin_id: Option<Destination>,
    /// Pause between ticks, in milliseconds.
    pub interval_ms: u64,
    pub source: SourceConfig,
    pub detector: DetectorConfig,
    pub cache: CacheConfig,
    pub message: MessageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed, a required field is
    /// missing, or a value is out of range.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let env_token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty());
        Self::parse_with_token(content, env_token)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// rejects it.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn parse_with_token(content: &str, env_token: Option<String>) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(ConfigError::Parse)?;

        let telegram_token = env_token
            .or(file.telegram_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "telegram_token",
            })?;
        let target = file.target.ok_or(ConfigError::MissingField { field: "target" })?;

        let config = Self {
            telegram_token,
            target,
            admin_id: file.admin_id,
            interval_ms: file.interval.unwrap_or(DEFAULT_INTERVAL_MS),
            source: file.source,
            detector: file.detector,
            cache: file.cache,
            message: file.message,
            logging: file.logging,
        };
        config.validate()?;

        Ok(config)
    }

    /// Pause between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if let Destination::Channel(name) = &self.target {
            validate_channel("target", name)?;
        }
        if let Some(Destination::Channel(name)) = &self.admin_id {
            validate_channel("admin_id", name)?;
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.detector.threshold <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.cache.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "cache.path" }.into());
        }
        self.source.validate()?;
        self.message.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_channel(field: &'static str, name: &str) -> std::result::Result<(), ConfigError> {
    if name.starts_with('@') && name.len() > 1 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a chat id or @channel, got {name:?}"),
        })
    }
}
