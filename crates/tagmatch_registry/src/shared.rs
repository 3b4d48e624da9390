//! Shared registry handle for multi-threaded callers
//!
//! The registry itself assumes a single control thread. When placements
//! arrive from multiple threads, the whole read-modify-notify sequence
//! must run under one lock, so this wrapper serializes every operation
//! behind a `parking_lot::Mutex`.

use crate::events::PlacementEvent;
use crate::registry::{RegistryError, SocketRegistry};
use crate::report::BoardReport;
use crate::socket::SocketDef;
use parking_lot::Mutex;
use std::sync::Arc;
use tagmatch_core::{Item, SocketId};
use tagmatch_event::SubscriberId;

/// Clone-able, mutex-guarded handle to a [`SocketRegistry`]
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<SocketRegistry>>,
}

impl SharedRegistry {
    /// Create a handle around an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry
    pub fn from_registry(registry: SocketRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Register a socket
    pub fn register(&self, def: SocketDef) -> Result<(), RegistryError> {
        self.inner.lock().register(def)
    }

    /// Place an item; completion handlers run while the lock is held
    pub fn place(&self, socket: SocketId, item: Item) -> Result<bool, RegistryError> {
        self.inner.lock().place(socket, item)
    }

    /// Clear a socket's occupant
    pub fn remove(&self, socket: SocketId) -> Result<(), RegistryError> {
        self.inner.lock().remove(socket)
    }

    /// Check the aggregate state
    pub fn all_correctly_occupied(&self) -> bool {
        self.inner.lock().all_correctly_occupied()
    }

    /// Check for unoccupied sockets
    pub fn any_unoccupied(&self) -> bool {
        self.inner.lock().any_unoccupied()
    }

    /// Subscribe to aggregate-state changes
    pub fn on_completion_change<F>(&self, handler: F) -> SubscriberId
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.inner.lock().on_completion_change(handler)
    }

    /// Drain recorded placement events
    pub fn drain_events(&self) -> Vec<PlacementEvent> {
        self.inner.lock().drain_events()
    }

    /// Take an ordered status snapshot
    pub fn snapshot(&self) -> BoardReport {
        self.inner.lock().snapshot()
    }

    /// Run a closure with exclusive access to the registry
    pub fn with<R>(&self, f: impl FnOnce(&mut SocketRegistry) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
