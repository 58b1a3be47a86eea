//! Notification content handed to renderers.

use super::change::Direction;

/// One side (buy or sell) of an update message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLine {
    pub direction: Direction,
    /// Signed delta with exactly two decimals.
    pub delta: String,
    /// Rate as quoted by the source.
    pub rate: String,
}

/// Fully formed update, independent of any markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    /// Human readable, localized timestamp.
    pub date: String,
    pub buy: RateLine,
    pub sell: RateLine,
}
