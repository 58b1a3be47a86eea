//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — `ScriptedSource`, a [`RateSource`](crate::port::RateSource)
//!   that replays a fixed script of quotes and failures.
//! - [`sink`] — `RecordingSink`, a [`MessageSink`](crate::port::MessageSink)
//!   that keeps every message and can be told to fail.
//! - [`cache`] — `MemoryCache`, an in-memory [`RateCache`](crate::port::RateCache).
//! - [`page`] — HTML fixtures shaped like the BROU rate board.

pub mod cache;
pub mod page;
pub mod sink;
pub mod source;

use rust_decimal::Decimal;

use crate::domain::RatePair;

/// Build a valid pair, panicking on invalid input.
pub fn pair(buy: Decimal, sell: Decimal) -> RatePair {
    RatePair::try_new(buy, sell).expect("valid test rate pair")
}
