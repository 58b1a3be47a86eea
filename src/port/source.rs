//! Rate source ports.

use async_trait::async_trait;

use crate::domain::RatePair;
use crate::error::{ParseError, Result};

/// Produces the currently quoted rate pair.
///
/// Fails with a fetch error when the upstream cannot be reached and with a
/// parse error when the content does not hold a valid pair.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self) -> Result<RatePair>;
}

/// Pulls a rate pair out of raw page content.
///
/// Kept apart from the transport so markup drift can be handled and tested
/// without the network.
pub trait RateExtractor: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the expected structure is absent or a
    /// value is not a positive number.
    fn extract_rates(&self, html: &str) -> std::result::Result<RatePair, ParseError>;
}
