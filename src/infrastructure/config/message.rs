//! Notification text configuration.

use chrono::format::{Item, StrftimeItems};
use chrono::Locale;
use serde::Deserialize;

use crate::application::composer::{NotificationComposer, DEFAULT_DATE_FORMAT};
use crate::error::ConfigError;

/// Locale and date pattern used when composing updates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// POSIX locale name, e.g. `es_ES` or `es_UY`.
    pub locale: String,
    /// strftime pattern for the update timestamp.
    pub date_format: String,
}

impl MessageConfig {
    /// Resolve the configured locale.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Locale::try_from(self.locale.as_str()).map_err(|_| ConfigError::InvalidValue {
            field: "message.locale",
            reason: format!("unknown locale {}", self.locale),
        })
    }

    /// Build the composer described by this configuration.
    pub fn composer(&self) -> Result<NotificationComposer, ConfigError> {
        Ok(NotificationComposer::new(
            self.locale()?,
            self.date_format.clone(),
        ))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.locale()?;
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "message.date_format",
                reason: format!("invalid pattern {}", self.date_format),
            });
        }
        Ok(())
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            locale: "es_ES".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}
