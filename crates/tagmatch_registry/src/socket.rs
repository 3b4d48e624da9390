//! Socket definitions and per-socket status

use core::fmt;
use serde::{Deserialize, Serialize};
use tagmatch_core::{SocketId, Tag};

/// Definition of a placement socket.
///
/// The required tag is fixed here and immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketDef {
    /// Unique identifier (derived from the name)
    pub id: SocketId,
    /// Display name, used in reports
    pub name: String,
    /// Tag an occupant must carry to count as correct
    pub required: Tag,
}

impl SocketDef {
    /// Create a new socket definition; the id is derived from the name
    pub fn new(name: impl Into<String>, required: Tag) -> Self {
        let name = name.into();
        Self {
            id: SocketId::from_name(&name),
            name,
            required,
        }
    }
}

/// Occupancy status of a single socket.
///
/// Empty is deliberately distinct from Incorrect: an empty socket means
/// the run is incomplete, a mismatched one means it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketStatus {
    /// Occupant present and its tag matches the required tag
    Correct,
    /// Occupant present but its tag does not match
    Incorrect,
    /// No occupant
    Empty,
}

impl SocketStatus {
    /// Stable textual label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Empty => "empty",
        }
    }

    /// Check if the socket holds a matching occupant
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Check if the socket has no occupant
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for SocketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_def() {
        let def = SocketDef::new("anchor_red", Tag::new("Red"));

        assert_eq!(def.id, SocketId::from_name("anchor_red"));
        assert_eq!(def.required, Tag::new("Red"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SocketStatus::Correct.label(), "correct");
        assert_eq!(SocketStatus::Incorrect.label(), "incorrect");
        assert_eq!(SocketStatus::Empty.label(), "empty");
    }

    #[test]
    fn test_status_predicates() {
        assert!(SocketStatus::Correct.is_correct());
        assert!(!SocketStatus::Incorrect.is_correct());
        assert!(SocketStatus::Empty.is_empty());
        assert!(!SocketStatus::Incorrect.is_empty());
    }
}
