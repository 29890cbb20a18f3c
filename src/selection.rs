//! Selection State
//!
//! The checked categories for one tree, deduplicated by id. Two
//! independent instances live side by side (our tree and the vendor
//! tree); they only meet when a submission payload is built.

use crate::models::Category;

/// Ordered, id-unique list of checked categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<Category>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the entry with this id if present, otherwise append.
    pub fn toggle(&mut self, category: &Category) {
        if let Some(pos) = self.items.iter().position(|c| c.id == category.id) {
            self.items.remove(pos);
        } else {
            self.items.push(category.clone());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|c| c.id == id)
    }

    /// First checked entry, the canonical target at submission time.
    pub fn first(&self) -> Option<&Category> {
        self.items.first()
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|c| c.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        let shoes = Category::new("c1", "Shoes");

        selection.toggle(&shoes);
        assert!(selection.contains("c1"));
        assert_eq!(selection.len(), 1);

        selection.toggle(&shoes);
        assert!(!selection.contains("c1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original_list() {
        let mut selection = Selection::new();
        selection.toggle(&Category::new("c1", "Shoes"));
        let before = selection.clone();

        let bags = Category::new("c2", "Bags");
        selection.toggle(&bags);
        selection.toggle(&bags);

        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_matches_by_id_not_identity() {
        let mut selection = Selection::new();
        selection.toggle(&Category::new("c1", "Shoes"));
        // Same id arriving from a different fetch still toggles off.
        selection.toggle(&Category::new("c1", "Shoes (renamed)"));

        assert!(selection.is_empty());
    }

    #[test]
    fn test_order_is_first_checked_first() {
        let mut selection = Selection::new();
        selection.toggle(&Category::new("c2", "Bags"));
        selection.toggle(&Category::new("c1", "Shoes"));

        assert_eq!(selection.first().unwrap().id, "c2");
        assert_eq!(selection.ids(), vec!["c2".to_string(), "c1".to_string()]);
    }
}
