//! Broadcast channel for draw events.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. Every committed
//! draw publishes a [`DrawEvent`] through the bus, and every monitor
//! connection holds its own receiver.

use tokio::sync::broadcast;

use super::DrawEvent;

/// Broadcast bus for [`DrawEvent`]s.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity.
/// Each receiver keeps its own cursor, so a slow observer never blocks
/// the publisher; once it falls more than `capacity` events behind, the
/// oldest events are dropped for that receiver only.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DrawEvent>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event to all subscribers without waiting.
    ///
    /// Returns the number of receivers that received the event.
    /// If there are no active receivers, the event is silently dropped.
    pub fn publish(&self, event: DrawEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Creates a new receiver that will receive all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DrawEvent> {
        self.sender.subscribe()
    }
}
