//! # tagmatch_event - Observer Signals and Event Channels
//!
//! Event plumbing for the placement simulation:
//! - [`Signal`]: explicit observer list, delivered synchronously in
//!   subscription order before the emitting call returns
//! - [`EventChannel`]: unbounded queue for consumers that drain on
//!   their own schedule

/// Handle returned by [`Signal::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Handler function type for signals
pub type Handler<E> = Box<dyn Fn(&E) + Send + Sync>;

/// An ordered list of observers for a single event type.
///
/// Delivery is synchronous: `emit` invokes every handler before it
/// returns, in subscription order.
pub struct Signal<E> {
    handlers: Vec<(SubscriberId, Handler<E>)>,
    next_subscriber_id: u64,
}

impl<E> Signal<E> {
    /// Create a new signal with no subscribers
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Subscribe a handler
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler; returns whether it was subscribed
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub_id, _)| *sub_id != id);
        self.handlers.len() != before
    }

    /// Invoke all handlers with the event, in subscription order
    pub fn emit(&self, event: &E) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    /// Get subscriber count
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Check if there are no subscribers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Unbounded channel for single-type events.
///
/// Producers push with `send`; consumers pull with `try_receive` or
/// `drain` whenever they get around to it.
pub struct EventChannel<E> {
    sender: crossbeam_channel::Sender<E>,
    receiver: crossbeam_channel::Receiver<E>,
}

impl<E> EventChannel<E> {
    /// Create a new channel
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    /// Send an event
    pub fn send(&self, event: E) {
        // Receiver lives as long as self, so this cannot fail.
        let _ = self.sender.send(event);
    }

    /// Receive a single event, if any is pending
    pub fn try_receive(&self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending events
    pub fn drain(&self) -> Vec<E> {
        self.receiver.try_iter().collect()
    }

    /// Get pending count
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Get a clonable sender for producers on other threads
    pub fn sender(&self) -> crossbeam_channel::Sender<E> {
        self.sender.clone()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{EventChannel, Signal, SubscriberId};
}
