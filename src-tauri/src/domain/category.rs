//! Category Entity
//!
//! A node in a category taxonomy. Both the store's own catalog tree and
//! the vendor-supplied trees use this shape; `product_count` is only
//! populated on vendor nodes.

use super::entity::Entity;
use serde::{Deserialize, Serialize};

/// A category tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier within its tree
    pub id: String,
    /// Display label (empty when the backend omits it)
    pub name: String,
    /// Containing node, when the backend sends a flat reference
    pub parent_id: Option<String>,
    /// Ordered child nodes
    #[serde(default)]
    pub children: Vec<Category>,
    /// Product count, vendor categories only
    pub product_count: Option<u64>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
            product_count: None,
        }
    }

    pub fn with_children(id: impl Into<String>, name: impl Into<String>, children: Vec<Category>) -> Self {
        Self {
            children,
            ..Self::new(id, name)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("c1", "Shoes");
        assert_eq!(cat.id(), "c1");
        assert_eq!(cat.name, "Shoes");
        assert!(cat.is_leaf());
        assert!(cat.product_count.is_none());
    }

    #[test]
    fn test_category_with_children() {
        let cat = Category::with_children("c1", "Shoes", vec![Category::new("c2", "Sneakers")]);
        assert!(!cat.is_leaf());
        assert_eq!(cat.children[0].name, "Sneakers");
    }
}
