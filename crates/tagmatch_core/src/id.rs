//! Opaque identifiers for sockets and items

use core::fmt;
use serde::{Deserialize, Serialize};

/// FNV-1a hash over a name
const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf29ce484222325u64;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Handle identifying a placement socket
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SocketId(u64);

impl SocketId {
    /// Create an ID from a socket name
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a(name.as_bytes()))
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the raw bits
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SocketId({:#018x})", self.0)
    }
}

impl fmt::Display for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Handle identifying a placeable item
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an ID from an item name
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a(name.as_bytes()))
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the raw bits
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({:#018x})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_stable() {
        let a = SocketId::from_name("anchor_red");
        let b = SocketId::from_name("anchor_red");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_names_distinct_ids() {
        assert_ne!(
            SocketId::from_name("anchor_red"),
            SocketId::from_name("anchor_blue")
        );
        assert_ne!(
            ItemId::from_name("red_cube"),
            ItemId::from_name("blue_cube")
        );
    }

    #[test]
    fn test_bits_roundtrip() {
        let id = ItemId::from_name("green_cube");
        assert_eq!(ItemId::from_bits(id.to_bits()), id);
    }
}
