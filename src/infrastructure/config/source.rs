//! Rate board source configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Public page carrying the BROU rate board.
pub const DEFAULT_SOURCE_URL: &str = "https://www.portal.brou.com.uy/";

/// Where and how to download the rate board.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Whole-request timeout. Unset leaves the HTTP client's default.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

impl SourceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.url).map_err(|e| ConfigError::InvalidValue {
            field: "source.url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "source.url",
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: None,
        }
    }
}
