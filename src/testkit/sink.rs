//! Recording message sink.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{DeliveryError, Result};
use crate::port::{Destination, MessageSink, OutboundMessage};

/// Thread-safe message collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<(Destination, OutboundMessage)>>>,
    failing: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every send to `destination` until [`RecordingSink::recover`].
    pub fn fail_for(&self, destination: Destination) {
        self.failing.lock().push(destination);
    }

    pub fn recover(&self) {
        self.failing.lock().clear();
    }

    pub fn sent(&self) -> Vec<(Destination, OutboundMessage)> {
        self.sent.lock().clone()
    }

    pub fn sent_to(&self, destination: &Destination) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| to == destination)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send(&self, destination: &Destination, message: &OutboundMessage) -> Result<()> {
        if self.failing.lock().contains(destination) {
            return Err(DeliveryError::Rejected {
                destination: destination.to_string(),
                reason: "scripted failure".into(),
            }
            .into());
        }
        self.sent.lock().push((destination.clone(), message.clone()));
        Ok(())
    }
}
