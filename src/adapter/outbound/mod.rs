//! Outbound adapters (driven side): implementations of the ports for the
//! BROU portal, the JSON cache file and Telegram.

pub mod brou;
pub mod cache;
pub mod telegram;
