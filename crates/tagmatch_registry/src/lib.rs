//! tagmatch_registry - Socket Registry and Match Evaluation
//!
//! This crate owns the mapping from placement sockets to their required
//! tag and current occupant.
//!
//! # Features
//!
//! - Socket registration with a fixed required tag
//! - Place/remove operations returning per-placement correctness
//! - Aggregate "all correctly occupied" evaluation with flip-only
//!   change notification
//! - Three-way per-socket status (correct / incorrect / empty)
//! - Ordered textual and serializable report snapshots
//! - Mutex-guarded shared handle for multi-threaded callers
//!
//! # Example
//!
//! ```
//! use tagmatch_core::{Item, Tag};
//! use tagmatch_registry::prelude::*;
//!
//! let mut registry = SocketRegistry::new();
//! let red = SocketDef::new("anchor_red", Tag::new("Red"));
//! registry.register(red.clone()).unwrap();
//!
//! let correct = registry.place(red.id, Item::new("red_cube", Tag::new("Red"))).unwrap();
//! assert!(correct);
//! assert!(registry.all_correctly_occupied());
//! ```

pub mod events;
pub mod registry;
pub mod report;
pub mod shared;
pub mod socket;

pub mod prelude {
    pub use crate::events::PlacementEvent;
    pub use crate::registry::{RegistryError, SocketRegistry};
    pub use crate::report::{BoardReport, ReportLine};
    pub use crate::shared::SharedRegistry;
    pub use crate::socket::{SocketDef, SocketStatus};
}

pub use prelude::*;
