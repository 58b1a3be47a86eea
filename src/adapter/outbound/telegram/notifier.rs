//! Telegram message delivery.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};
use tracing::debug;

use crate::error::{DeliveryError, Result};
use crate::port::{Destination, Markup, MessageSink, OutboundMessage};

/// Sends messages through the Telegram Bot API.
///
/// Each send is awaited, so a successful return means Telegram accepted the
/// message.
#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
}

impl TelegramSink {
    /// Create a sink for the bot identified by `token` (from BotFather).
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn send(&self, destination: &Destination, message: &OutboundMessage) -> Result<()> {
        let mut request = self
            .bot
            .send_message(recipient(destination), message.text.clone());
        if message.markup == Markup::Html {
            request = request.parse_mode(ParseMode::Html);
        }

        request.await.map_err(|e| DeliveryError::Rejected {
            destination: destination.to_string(),
            reason: e.to_string(),
        })?;

        debug!(destination = %destination, "Telegram message sent");
        Ok(())
    }
}

fn recipient(destination: &Destination) -> Recipient {
    match destination {
        Destination::Chat(id) => Recipient::Id(ChatId(*id)),
        Destination::Channel(username) => Recipient::ChannelUsername(username.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_ids_map_to_numeric_recipients() {
        assert_eq!(
            recipient(&Destination::Chat(-1001234)),
            Recipient::Id(ChatId(-1001234))
        );
    }

    #[test]
    fn usernames_map_to_channel_recipients() {
        assert_eq!(
            recipient(&Destination::Channel("@dolarbrou".into())),
            Recipient::ChannelUsername("@dolarbrou".into())
        );
    }
}
