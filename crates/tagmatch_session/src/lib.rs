//! tagmatch_session - Session Layer
//!
//! Collaborators that sit on top of the socket registry:
//!
//! # Features
//!
//! - Success / failure / incomplete outcome evaluation
//! - Report persistence with text and JSON formats
//! - Finish-button toggle state with a disable latch
//! - Per-socket visual feedback driven by placement events
//! - Tutorial pager with wrap-around paging
//!
//! # Example
//!
//! ```
//! use tagmatch_core::{Item, Tag};
//! use tagmatch_registry::{SocketDef, SocketRegistry};
//! use tagmatch_session::prelude::*;
//!
//! let mut registry = SocketRegistry::new();
//! let red = SocketDef::new("anchor_red", Tag::new("Red"));
//! registry.register(red.clone()).unwrap();
//!
//! let mut session = Session::new(registry);
//! session.place(red.id, Item::new("red_cube", Tag::new("Red"))).unwrap();
//! let result = session.press_finish().unwrap();
//! assert_eq!(result.outcome, SessionOutcome::Success);
//! ```

pub mod button;
pub mod feedback;
pub mod outcome;
pub mod session;
pub mod tutorial;
pub mod writer;

pub mod prelude {
    pub use crate::button::{ButtonFeedback, FinishButton};
    pub use crate::feedback::{FeedbackTracker, SocketVisual};
    pub use crate::outcome::SessionOutcome;
    pub use crate::session::{FinishResult, Session};
    pub use crate::tutorial::TutorialPager;
    pub use crate::writer::{ReportFormat, ReportWriter, SessionError};
}

pub use prelude::*;
