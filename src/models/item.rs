//! Pantry item record.
//!
//! Items are keyed by name in the backing store; the name is the
//! document id. A stored item always has a count of at least 1 -
//! a count that would reach 0 deletes the record instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single pantry record: a named item and how many of it are on hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PantryItem {
    /// Item name, also the record's key in the store (case-sensitive)
    pub name: String,
    /// Units on hand, always >= 1 for a stored record
    pub count: u32,
}

impl PantryItem {
    /// Create a new pantry item.
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Display form of the name: first character uppercased, rest untouched.
    ///
    /// The stored key keeps the user's original casing; only the
    /// presentation capitalizes.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for PantryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.display_name(), self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = PantryItem::new("rice", 3);
        assert_eq!(item.name, "rice");
        assert_eq!(item.count, 3);
    }

    #[test]
    fn test_display_name_capitalizes_first_letter_only() {
        let item = PantryItem::new("olive oil", 1);
        assert_eq!(item.display_name(), "Olive oil");

        // Already-capitalized keys pass through unchanged
        let item = PantryItem::new("Rice", 2);
        assert_eq!(item.display_name(), "Rice");
    }

    #[test]
    fn test_display_name_empty() {
        let item = PantryItem::new("", 1);
        assert_eq!(item.display_name(), "");
    }

    #[test]
    fn test_display() {
        let item = PantryItem::new("beans", 4);
        assert_eq!(format!("{}", item), "Beans (x4)");
    }

    #[test]
    fn test_serde_round_trip() {
        let item = PantryItem::new("flour", 2);
        let json = serde_json::to_string(&item).unwrap();
        let back: PantryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
