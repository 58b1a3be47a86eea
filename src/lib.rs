//! dolar-bot - BROU exchange rate watcher.
//!
//! Polls the BROU portal for the dollar buy/sell quote, compares it with the
//! last quote the audience was told about, and when either side moved by at
//! least the threshold posts an update to Telegram and caches the new quote.
//!
//! # Architecture
//!
//! - [`domain`] - Rate pairs, change reports, notification payloads
//! - [`port`] - Traits for the rate source, cache, message sink and renderer
//! - [`application`] - Change detector, notification composer, scheduler loop
//! - [`adapter`] - BROU HTTP/HTML source, JSON file cache, Telegram, CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram Bot API delivery via teloxide
//! - `testkit` - Scripted sources, recording sinks and fixtures for tests
//!
//! # Example
//!
//! ```no_run
//! use dolar_bot::application::ChangeDetector;
//! use dolar_bot::domain::RatePair;
//! use rust_decimal_macros::dec;
//!
//! let previous = RatePair::try_new(dec!(41.10), dec!(43.25)).unwrap();
//! let current = RatePair::try_new(dec!(41.10), dec!(43.20)).unwrap();
//! assert!(ChangeDetector::default().detect(&current, &previous).is_some());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
