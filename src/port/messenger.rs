//! Messaging ports: where messages go and how they are rendered.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::NotificationPayload;
use crate::error::Result;

/// A chat a message can be sent to.
///
/// Deserializes from either an integer chat id or a `@channel` username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    Chat(i64),
    Channel(String),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Chat(id) => write!(f, "{id}"),
            Destination::Channel(name) => f.write_str(name),
        }
    }
}

/// Markup mode the sink must declare when sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Html,
}

/// Rendered message ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub markup: Markup,
}

impl OutboundMessage {
    #[must_use]
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Html,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Plain,
        }
    }
}

/// Delivers rendered messages.
///
/// Unlike fire-and-forget notifiers, `send` resolves only once the transport
/// has accepted the message, so callers can act on confirmed delivery.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// # Errors
    ///
    /// Returns a delivery error if the transport rejects or fails the send.
    async fn send(&self, destination: &Destination, message: &OutboundMessage) -> Result<()>;
}

/// Turns structured content into transport text.
pub trait Renderer: Send + Sync {
    /// Render a rate update.
    fn render_update(&self, payload: &NotificationPayload) -> OutboundMessage;

    /// Render an operational alert for the admin channel.
    fn render_alert(&self, error: &str) -> OutboundMessage;
}
