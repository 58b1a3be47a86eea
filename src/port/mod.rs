//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │     Application      │
//!                 │  detector, composer, │
//!                 │      scheduler       │
//!                 └──────────────────────┘
//!                   │        │         │
//!                   ▼        ▼         ▼
//!             ┌────────┐ ┌───────┐ ┌──────────┐
//!             │ Source │ │ Cache │ │ Sink +   │
//!             │        │ │       │ │ Renderer │
//!             └────────┘ └───────┘ └──────────┘
//! ```
//!
//! - [`RateSource`], [`RateExtractor`] - upstream rate board
//! - [`RateCache`] - last notified pair
//! - [`MessageSink`], [`Renderer`] - message delivery and presentation

mod cache;
mod messenger;
mod source;

pub use cache::RateCache;
pub use messenger::{Destination, Markup, MessageSink, OutboundMessage, Renderer};
pub use source::{RateExtractor, RateSource};
