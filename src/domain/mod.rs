//! Domain types for the rate watcher. Pure data, no I/O.
//!
//! - [`RatePair`] - buy/sell quote
//! - [`ChangeReport`] and [`Direction`] - a detected movement
//! - [`NotificationPayload`] - what a renderer turns into a message

pub mod change;
pub mod notification;
pub mod rate;

pub use change::{ChangeReport, Direction};
pub use notification::{NotificationPayload, RateLine};
pub use rate::RatePair;
