//! Per-socket visual feedback

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tagmatch_core::SocketId;
use tagmatch_registry::PlacementEvent;

/// Visual state of a socket shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketVisual {
    /// Original appearance (nothing placed)
    Neutral,
    /// Highlight for a matching occupant
    Correct,
    /// Highlight for a mismatched occupant
    Wrong,
}

impl Default for SocketVisual {
    fn default() -> Self {
        Self::Neutral
    }
}

/// Tracks the visual state of every socket from placement events.
///
/// Removal resets the socket back to its original appearance.
#[derive(Debug, Clone, Default)]
pub struct FeedbackTracker {
    visuals: HashMap<SocketId, SocketVisual>,
}

impl FeedbackTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one placement event
    pub fn apply(&mut self, event: &PlacementEvent) {
        match event {
            PlacementEvent::ItemPlaced { socket, correct, .. } => {
                let visual = if *correct {
                    SocketVisual::Correct
                } else {
                    SocketVisual::Wrong
                };
                self.visuals.insert(*socket, visual);
            }
            PlacementEvent::ItemRemoved { socket, .. } => {
                self.visuals.remove(socket);
            }
        }
    }

    /// Get the visual state of a socket (neutral when never touched)
    pub fn visual(&self, socket: SocketId) -> SocketVisual {
        self.visuals.get(&socket).copied().unwrap_or_default()
    }

    /// Reset every socket back to neutral
    pub fn reset_all(&mut self) {
        self.visuals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmatch_core::{Item, Tag};

    #[test]
    fn test_placement_sets_visual() {
        let mut tracker = FeedbackTracker::new();
        let socket = SocketId::from_name("anchor_red");

        tracker.apply(&PlacementEvent::ItemPlaced {
            socket,
            item: Item::new("blue_cube", Tag::new("Blue")),
            correct: false,
        });
        assert_eq!(tracker.visual(socket), SocketVisual::Wrong);

        tracker.apply(&PlacementEvent::ItemPlaced {
            socket,
            item: Item::new("red_cube", Tag::new("Red")),
            correct: true,
        });
        assert_eq!(tracker.visual(socket), SocketVisual::Correct);
    }

    #[test]
    fn test_removal_resets_visual() {
        let mut tracker = FeedbackTracker::new();
        let socket = SocketId::from_name("anchor_red");
        let item = Item::new("red_cube", Tag::new("Red"));

        tracker.apply(&PlacementEvent::ItemPlaced {
            socket,
            item: item.clone(),
            correct: true,
        });
        tracker.apply(&PlacementEvent::ItemRemoved { socket, item });

        assert_eq!(tracker.visual(socket), SocketVisual::Neutral);
    }

    #[test]
    fn test_untouched_socket_is_neutral() {
        let tracker = FeedbackTracker::new();
        assert_eq!(
            tracker.visual(SocketId::from_name("anchor_blue")),
            SocketVisual::Neutral
        );
    }
}
