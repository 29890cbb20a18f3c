//! Mapping Records
//!
//! A persisted association between one of our catalog categories and a
//! vendor category. The backend stores mappings as flat rows, one per
//! (our category, vendor category) pair; many vendor categories can map
//! to the same internal category.

use serde::{Deserialize, Serialize};

/// Our-side category reference as it appears in a mapping row.
///
/// Rows occasionally arrive without an id; such rows are kept here and
/// skipped when the frontend groups mappings for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedOurCategory {
    pub id: Option<String>,
    pub name: String,
    /// Parent category *name*, when the category is nested
    pub parent: Option<String>,
}

/// One mapped (our category, vendor category) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub our_category: MappedOurCategory,
    pub vendor_category_id: String,
    pub vendor_category_name: String,
    pub product_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrips_through_json() {
        let record = MappingRecord {
            our_category: MappedOurCategory {
                id: Some("c1".to_string()),
                name: "Shoes".to_string(),
                parent: None,
            },
            vendor_category_id: "v9".to_string(),
            vendor_category_name: "Footwear".to_string(),
            product_count: Some(12),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MappingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
