//! Local snapshot filtering.
//!
//! A pure function of (snapshot, search term); never touches the
//! store and never mutates the snapshot it is given.

use crate::models::PantryItem;

/// Case-insensitive substring filter over a pantry snapshot.
///
/// An empty term matches everything.
pub fn by_term(snapshot: &[PantryItem], term: &str) -> Vec<PantryItem> {
    let needle = term.to_lowercase();
    snapshot
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<PantryItem> {
        vec![PantryItem::new("Rice", 5), PantryItem::new("Beans", 2)]
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let filtered = by_term(&snapshot(), "ri");
        assert_eq!(filtered, vec![PantryItem::new("Rice", 5)]);

        let filtered = by_term(&snapshot(), "RI");
        assert_eq!(filtered, vec![PantryItem::new("Rice", 5)]);
    }

    #[test]
    fn test_empty_term_returns_everything() {
        assert_eq!(by_term(&snapshot(), ""), snapshot());
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(by_term(&snapshot(), "zz").is_empty());
    }

    #[test]
    fn test_input_snapshot_untouched() {
        let original = snapshot();
        let _ = by_term(&original, "ri");
        assert_eq!(original, snapshot());
    }
}
