//! Item definitions

use crate::id::ItemId;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// A placeable object carrying a tag used to satisfy socket constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (derived from the name)
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Tag describing which socket(s) this item satisfies
    pub tag: Tag,
}

impl Item {
    /// Create a new item; the id is derived from the name
    pub fn new(name: impl Into<String>, tag: Tag) -> Self {
        let name = name.into();
        Self {
            id: ItemId::from_name(&name),
            name,
            tag,
        }
    }

    /// Check if this item satisfies a required tag
    pub fn satisfies(&self, required: &Tag) -> bool {
        self.tag == *required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("red_cube", Tag::new("Red"));

        assert_eq!(item.id, ItemId::from_name("red_cube"));
        assert_eq!(item.name, "red_cube");
        assert!(item.satisfies(&Tag::new("Red")));
        assert!(!item.satisfies(&Tag::new("Blue")));
    }
}
