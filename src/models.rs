//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Category tree node (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<Category>,
    /// Populated on vendor categories only
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
}

/// Vendor (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
}

/// Our-side category reference inside a mapping row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedOurCategory {
    pub id: Option<String>,
    pub name: String,
    pub parent: Option<String>,
}

/// One mapped (our category, vendor category) pair (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub our_category: MappedOurCategory,
    pub vendor_category_id: String,
    pub vendor_category_name: String,
    pub product_count: Option<u64>,
}
