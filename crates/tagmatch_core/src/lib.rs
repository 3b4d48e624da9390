//! tagmatch_core - Core Primitives
//!
//! Shared primitives for the placement simulation:
//!
//! - Opaque socket and item handles derived from names
//! - Tags describing which socket an item satisfies
//! - Item definitions
//!
//! # Example
//!
//! ```
//! use tagmatch_core::{Item, SocketId, Tag};
//!
//! let socket = SocketId::from_name("anchor_red");
//! let cube = Item::new("red_cube", Tag::new("Red"));
//! assert_eq!(cube.tag.as_str(), "Red");
//! assert_ne!(socket, SocketId::from_name("anchor_blue"));
//! ```

pub mod id;
pub mod item;
pub mod tag;

pub mod prelude {
    pub use crate::id::{ItemId, SocketId};
    pub use crate::item::Item;
    pub use crate::tag::Tag;
}

pub use prelude::*;
