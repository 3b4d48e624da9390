//! Session outcome evaluation

use core::fmt;
use serde::{Deserialize, Serialize};
use tagmatch_registry::SocketRegistry;

/// Result of pressing the finish button.
///
/// Incomplete is not terminal: the run continues until every socket is
/// occupied one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOutcome {
    /// Every socket is correctly occupied
    Success,
    /// Every socket is occupied, at least one incorrectly
    Failure,
    /// At least one socket is still empty
    Incomplete,
}

impl SessionOutcome {
    /// Evaluate the current registry state
    pub fn evaluate(registry: &SocketRegistry) -> Self {
        if registry.all_correctly_occupied() {
            Self::Success
        } else if registry.any_unoccupied() {
            Self::Incomplete
        } else {
            Self::Failure
        }
    }

    /// Check if this outcome ends the run
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Incomplete)
    }

    /// Stable textual label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmatch_core::{Item, Tag};
    use tagmatch_registry::SocketDef;

    fn registry_with_two_sockets() -> (SocketRegistry, SocketDef, SocketDef) {
        let mut registry = SocketRegistry::new();
        let red = SocketDef::new("anchor_red", Tag::new("Red"));
        let blue = SocketDef::new("anchor_blue", Tag::new("Blue"));
        registry.register(red.clone()).unwrap();
        registry.register(blue.clone()).unwrap();
        (registry, red, blue)
    }

    #[test]
    fn test_incomplete_while_sockets_are_empty() {
        let (mut registry, red, _) = registry_with_two_sockets();

        assert_eq!(
            SessionOutcome::evaluate(&registry),
            SessionOutcome::Incomplete
        );

        registry
            .place(red.id, Item::new("red_cube", Tag::new("Red")))
            .unwrap();
        assert_eq!(
            SessionOutcome::evaluate(&registry),
            SessionOutcome::Incomplete
        );
    }

    #[test]
    fn test_failure_when_fully_occupied_with_mismatch() {
        let (mut registry, red, blue) = registry_with_two_sockets();

        registry
            .place(red.id, Item::new("blue_cube", Tag::new("Blue")))
            .unwrap();
        registry
            .place(blue.id, Item::new("blue_cube_2", Tag::new("Blue")))
            .unwrap();

        assert_eq!(SessionOutcome::evaluate(&registry), SessionOutcome::Failure);
        assert!(SessionOutcome::Failure.is_final());
    }

    #[test]
    fn test_success_when_all_match() {
        let (mut registry, red, blue) = registry_with_two_sockets();

        registry
            .place(red.id, Item::new("red_cube", Tag::new("Red")))
            .unwrap();
        registry
            .place(blue.id, Item::new("blue_cube", Tag::new("Blue")))
            .unwrap();

        assert_eq!(SessionOutcome::evaluate(&registry), SessionOutcome::Success);
        assert!(!SessionOutcome::Incomplete.is_final());
    }
}
