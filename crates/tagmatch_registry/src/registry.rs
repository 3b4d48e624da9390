//! The socket registry

use crate::events::PlacementEvent;
use crate::report::{BoardReport, ReportLine};
use crate::socket::{SocketDef, SocketStatus};
use tagmatch_core::{Item, SocketId};
use tagmatch_event::{Signal, SubscriberId};
use thiserror::Error;

/// Registry errors.
///
/// Both are local, non-fatal conditions: the registry reports them and
/// leaves its state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Operation referenced a socket that was never registered
    #[error("unknown socket: {0}")]
    UnknownSocket(SocketId),
    /// A socket with this id is already registered
    #[error("socket already registered: {0}")]
    DuplicateRegistration(SocketId),
}

/// One registered socket and its current occupant
#[derive(Debug, Clone)]
struct SocketEntry {
    def: SocketDef,
    occupant: Option<Item>,
}

impl SocketEntry {
    fn status(&self) -> SocketStatus {
        match &self.occupant {
            Some(item) if item.satisfies(&self.def.required) => SocketStatus::Correct,
            Some(_) => SocketStatus::Incorrect,
            None => SocketStatus::Empty,
        }
    }
}

/// Registry of placement sockets.
///
/// Owns the socket -> (required tag, occupant) mapping, evaluates the
/// aggregate "all correctly occupied" state after every place/remove, and
/// notifies subscribers synchronously whenever that boolean flips.
///
/// Entries are kept in registration order; reports come out in the same
/// order. Lookups are linear scans - the registry holds on the order of
/// a dozen sockets.
pub struct SocketRegistry {
    entries: Vec<SocketEntry>,
    /// Last computed aggregate value. Starts false; only place/remove
    /// re-evaluate it.
    all_correct: bool,
    completion: Signal<bool>,
    pending_events: Vec<PlacementEvent>,
}

impl SocketRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            all_correct: false,
            completion: Signal::new(),
            pending_events: Vec::new(),
        }
    }

    /// Register a socket with no occupant.
    ///
    /// Sockets are registered once during setup; a duplicate id is
    /// rejected without touching existing state, since accepting it could
    /// silently change the required tag.
    pub fn register(&mut self, def: SocketDef) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.def.id == def.id) {
            return Err(RegistryError::DuplicateRegistration(def.id));
        }

        log::debug!("registered socket {} (requires {})", def.name, def.required);
        self.entries.push(SocketEntry {
            def,
            occupant: None,
        });
        Ok(())
    }

    /// Place an item into a socket, replacing any previous occupant.
    ///
    /// Returns whether the item's tag matches the socket's required tag.
    /// Triggers re-evaluation of the aggregate state before returning.
    pub fn place(&mut self, socket: SocketId, item: Item) -> Result<bool, RegistryError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.def.id == socket)
            .ok_or(RegistryError::UnknownSocket(socket))?;

        let correct = item.satisfies(&entry.def.required);
        if correct {
            log::debug!("correct item {} placed in socket {}", item.name, entry.def.name);
        } else {
            log::debug!(
                "incorrect item in socket {} (required {}, placed {})",
                entry.def.name,
                entry.def.required,
                item.tag
            );
        }

        if let Some(previous) = entry.occupant.replace(item.clone()) {
            log::debug!(
                "socket {} occupant {} replaced by {}",
                entry.def.name,
                previous.name,
                item.name
            );
        }
        self.pending_events.push(PlacementEvent::ItemPlaced {
            socket,
            item,
            correct,
        });

        self.reevaluate();
        Ok(correct)
    }

    /// Clear the occupant of a socket.
    ///
    /// Removing from an already-empty socket succeeds without recording
    /// an event. Triggers re-evaluation of the aggregate state.
    pub fn remove(&mut self, socket: SocketId) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.def.id == socket)
            .ok_or(RegistryError::UnknownSocket(socket))?;

        if let Some(item) = entry.occupant.take() {
            log::debug!("item {} removed from socket {}", item.name, entry.def.name);
            self.pending_events
                .push(PlacementEvent::ItemRemoved { socket, item });
        }

        self.reevaluate();
        Ok(())
    }

    /// Check if every registered socket holds a matching occupant.
    ///
    /// An empty registry trivially returns true; callers distinguish
    /// "complete and correct" from "nothing placed yet" via
    /// [`any_unoccupied`](Self::any_unoccupied).
    pub fn all_correctly_occupied(&self) -> bool {
        self.entries.iter().all(|e| e.status().is_correct())
    }

    /// Check if at least one registered socket has no occupant
    pub fn any_unoccupied(&self) -> bool {
        self.entries.iter().any(|e| e.occupant.is_none())
    }

    /// Get the status of a single socket
    pub fn socket_status(&self, socket: SocketId) -> Option<SocketStatus> {
        self.entries
            .iter()
            .find(|e| e.def.id == socket)
            .map(|e| e.status())
    }

    /// Iterate socket statuses in registration order
    pub fn statuses(&self) -> impl Iterator<Item = (&SocketDef, SocketStatus)> {
        self.entries.iter().map(|e| (&e.def, e.status()))
    }

    /// Get the current occupant of a socket
    pub fn occupant(&self, socket: SocketId) -> Option<&Item> {
        self.entries
            .iter()
            .find(|e| e.def.id == socket)?
            .occupant
            .as_ref()
    }

    /// Get registered socket count
    pub fn socket_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if no sockets are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribe to aggregate-state changes.
    ///
    /// The handler receives the new value, synchronously and in
    /// subscription order, before the place/remove call that caused the
    /// flip returns. Operations that do not change the value emit nothing.
    pub fn on_completion_change<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.completion.subscribe(handler)
    }

    /// Remove a completion-change subscriber
    pub fn unsubscribe_completion(&mut self, id: SubscriberId) -> bool {
        self.completion.unsubscribe(id)
    }

    /// Drain placement events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlacementEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Take an ordered snapshot of every socket's status
    pub fn snapshot(&self) -> BoardReport {
        BoardReport {
            lines: self
                .entries
                .iter()
                .map(|e| ReportLine {
                    socket: e.def.name.clone(),
                    status: e.status(),
                })
                .collect(),
        }
    }

    /// Recompute the aggregate and notify subscribers on a flip
    fn reevaluate(&mut self) {
        let now = self.all_correctly_occupied();
        if now != self.all_correct {
            self.all_correct = now;
            if now {
                log::info!("all sockets are correctly occupied");
            } else {
                log::info!("not all sockets are correctly occupied");
            }
            self.completion.emit(&now);
        }
    }
}

impl Default for SocketRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SocketRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SocketRegistry")
            .field("sockets", &self.entries.len())
            .field("all_correct", &self.all_correct)
            .finish()
    }
}
