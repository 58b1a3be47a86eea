//! Composition root: turns a [`Config`] into a ready-to-run [`Scheduler`].

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::brou::HttpRateSource;
use crate::adapter::outbound::cache::JsonFileCache;
use crate::adapter::outbound::telegram::HtmlRenderer;
use crate::application::{ChangeDetector, Ports, Routes, Scheduler};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::MessageSink;

/// Build the rate source from configuration.
#[must_use]
pub fn build_source(config: &Config) -> HttpRateSource {
    HttpRateSource::from_config(&config.source)
}

/// Build the rate cache from configuration.
#[must_use]
pub fn build_cache(config: &Config) -> JsonFileCache {
    JsonFileCache::new(&config.cache.path)
}

/// Build the Telegram sink.
#[cfg(feature = "telegram")]
#[must_use]
pub fn build_sink(config: &Config) -> Arc<dyn MessageSink> {
    use crate::adapter::outbound::telegram::TelegramSink;

    Arc::new(TelegramSink::new(config.telegram_token.clone()))
}

/// Wire a scheduler around the given sink.
///
/// # Errors
///
/// Returns a config error if the message settings cannot be resolved.
#[allow(clippy::result_large_err)]
pub fn build_scheduler(config: &Config, sink: Arc<dyn MessageSink>) -> Result<Scheduler> {
    let composer = config.message.composer()?;
    let cache = build_cache(config);
    info!(path = %cache.path().display(), "Rate cache configured");

    let ports = Ports {
        source: Arc::new(build_source(config)),
        cache: Arc::new(cache),
        sink,
        renderer: Arc::new(HtmlRenderer::default()),
    };
    let routes = Routes {
        target: config.target.clone(),
        admin: config.admin_id.clone(),
    };

    Ok(Scheduler::new(ports, routes)
        .with_detector(ChangeDetector::new(config.detector.threshold))
        .with_composer(composer)
        .with_interval(config.interval()))
}
