//! Telegram adapter: HTML rendering and Bot API delivery.

pub mod format;
#[cfg(feature = "telegram")]
pub mod notifier;

pub use format::HtmlRenderer;
#[cfg(feature = "telegram")]
pub use notifier::TelegramSink;
