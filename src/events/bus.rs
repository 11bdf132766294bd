//! Single-threaded event queue using mpsc channels.
//!
//! The bus provides the one queue both event sources feed:
//! - The window-system pump publishes translated events
//! - The fade schedule publishes [`CoverEvent::Tick`] when a tick is due
//! - The main loop drains and dispatches them in arrival order
//!
//! Nothing draws outside `drain()`, so a tick can never interleave with the
//! handling of a window event.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::CoverEvent;

/// Event queue shared by the window pump and the tick schedule.
///
/// # Example
///
/// ```
/// use slock_cover::events::{CoverEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(CoverEvent::Expose);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<CoverEvent>,
    receiver: Receiver<CoverEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<CoverEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so Disconnected cannot happen
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, oldest first.
    pub fn drain(&self) -> Vec<CoverEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<CoverEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// If the bus has been dropped (shutting down), the send silently fails.
    pub fn publish(&self, event: CoverEvent) {
        let _ = self.sender.send(event);
    }
}
