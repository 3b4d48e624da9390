//! Tags describing placement constraints

use core::fmt;
use serde::{Deserialize, Serialize};

/// A constraint label carried by items and required by sockets.
///
/// Comparison is exact and case-sensitive.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(Box<str>);

impl Tag {
    /// Create a new tag
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().into_boxed_str())
    }

    /// Get the tag label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
