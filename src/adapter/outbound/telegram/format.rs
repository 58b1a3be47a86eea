//! Message formatting for Telegram. Updates use HTML parse mode, alerts go
//! out as plain text.

use crate::domain::{Direction, NotificationPayload, RateLine};
use crate::port::{OutboundMessage, Renderer};

const MONEYBAG: &str = "💰";

/// Renders updates as Telegram HTML and alerts as plain text.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("Dólar BROU")
    }
}

impl Renderer for HtmlRenderer {
    fn render_update(&self, payload: &NotificationPayload) -> OutboundMessage {
        OutboundMessage::html(format!(
            "{MONEYBAG} <b>{}</b>\n\
            <i>{}</i>\n\
            \n\
            {}\n\
            {}",
            escape_html(&self.title),
            escape_html(&payload.date),
            format_line("Compra", &payload.buy),
            format_line("Venta", &payload.sell),
        ))
    }

    fn render_alert(&self, error: &str) -> OutboundMessage {
        OutboundMessage::plain(error)
    }
}

fn format_line(label: &str, line: &RateLine) -> String {
    format!(
        "{label}: <b>{}</b> {} <code>{}</code>",
        escape_html(&line.rate),
        direction_icon(line.direction),
        escape_html(&signed(&line.delta)),
    )
}

fn direction_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "↗️",
        Direction::Down => "↘️",
        Direction::Flat => "➡️",
    }
}

fn signed(delta: &str) -> String {
    if delta.starts_with('-') {
        delta.to_string()
    } else {
        format!("+{delta}")
    }
}

/// Escape text for Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
