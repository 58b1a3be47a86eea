//! Last-notified rate persistence port.

use crate::domain::RatePair;
use crate::error::Result;

/// Durable home of the last rate pair the audience was told about.
pub trait RateCache: Send + Sync {
    /// Read the persisted pair.
    ///
    /// Never fails: a missing or unreadable record yields [`RatePair::empty`].
    fn load(&self) -> RatePair;

    /// Replace the persisted pair.
    ///
    /// Readers must never observe a partially written record.
    ///
    /// # Errors
    ///
    /// Returns a persist error if the write fails.
    fn save(&self, pair: &RatePair) -> Result<()>;
}
