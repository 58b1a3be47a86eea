//! HTTP rate source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, error, warn};

use crate::domain::RatePair;
use crate::error::{FetchError, Result};
use crate::infrastructure::config::source::SourceConfig;
use crate::port::{RateExtractor, RateSource};

use super::extract::BrouTableExtractor;

/// Downloads the rate board and hands the page to an extractor.
pub struct HttpRateSource {
    http: HttpClient,
    url: String,
    extractor: Arc<dyn RateExtractor>,
}

impl HttpRateSource {
    /// Create a source with the transport's default timeouts.
    #[must_use]
    pub fn new(url: impl Into<String>, extractor: Arc<dyn RateExtractor>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
            extractor,
        }
    }

    /// Create the BROU source described by `config`.
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            url: config.url.clone(),
            extractor: Arc::new(BrouTableExtractor),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn download(&self) -> Result<String> {
        debug!(url = %self.url, "Downloading rate board");
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            }
            .into());
        }

        Ok(response.text().await.map_err(FetchError::Body)?)
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch(&self) -> Result<RatePair> {
        let html = match self.download().await {
            Ok(html) => html,
            Err(err) => {
                error!(url = %self.url, error = %err, "Could not download rate board");
                return Err(err);
            }
        };

        self.extractor.extract_rates(&html).map_err(|err| {
            error!(error = %err, "Could not parse rate board");
            err.into()
        })
    }
}
