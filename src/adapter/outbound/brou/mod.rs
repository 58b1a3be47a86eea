//! BROU portal adapter: HTTP download plus table extraction.

pub mod client;
pub mod extract;

pub use client::HttpRateSource;
pub use extract::BrouTableExtractor;
