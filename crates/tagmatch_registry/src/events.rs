//! Placement events

use tagmatch_core::{Item, SocketId};

/// A discrete placement change, recorded per operation and drained by
/// UI/feedback collaborators.
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// An item was placed into a socket
    ItemPlaced {
        /// Target socket
        socket: SocketId,
        /// The placed item
        item: Item,
        /// Whether the item's tag matches the socket's required tag
        correct: bool,
    },
    /// An occupant was removed from a socket
    ItemRemoved {
        /// Source socket
        socket: SocketId,
        /// The removed item
        item: Item,
    },
}

impl PlacementEvent {
    /// The socket this event concerns
    pub fn socket(&self) -> SocketId {
        match self {
            Self::ItemPlaced { socket, .. } | Self::ItemRemoved { socket, .. } => *socket,
        }
    }

    /// Check if this is a placement
    pub fn is_placement(&self) -> bool {
        matches!(self, Self::ItemPlaced { .. })
    }
}
