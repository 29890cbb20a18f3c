//! Mapping Aggregation
//!
//! Shapes the backend's flat mapping rows into per-category groups
//! for the mapped table, and assembles the submission payload from
//! the two selections.

use std::collections::HashMap;

use crate::models::{Category, MappingRecord};
use crate::selection::Selection;
use crate::tree::resolve_category_id;

/// Our-category header of a group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedOurCategory {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
}

/// One vendor category inside a group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedVendorCategory {
    pub id: String,
    pub name: String,
    pub product_count: Option<u64>,
}

/// All vendor categories mapped to one of our categories
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedMapping {
    pub our_category: GroupedOurCategory,
    pub vendor_categories: Vec<GroupedVendorCategory>,
}

/// Group flat mapping rows by our-category id, preserving the order
/// of first appearance. Rows without an our-category id are partial
/// data from the backend and are skipped.
pub fn group_mappings(records: &[MappingRecord]) -> Vec<GroupedMapping> {
    let mut groups: Vec<GroupedMapping> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(our_id) = record.our_category.id.as_ref() else {
            continue;
        };

        let slot = match index.get(our_id) {
            Some(&i) => i,
            None => {
                index.insert(our_id.clone(), groups.len());
                groups.push(GroupedMapping {
                    our_category: GroupedOurCategory {
                        id: our_id.clone(),
                        name: record.our_category.name.clone(),
                        parent: record.our_category.parent.clone(),
                    },
                    vendor_categories: Vec::new(),
                });
                groups.len() - 1
            }
        };

        groups[slot].vendor_categories.push(GroupedVendorCategory {
            id: record.vendor_category_id.clone(),
            name: record.vendor_category_name.clone(),
            product_count: record.product_count,
        });
    }

    groups
}

/// True when a group matches the search term: our category name, its
/// parent name, or any mapped vendor category name.
pub fn grouped_matches(group: &GroupedMapping, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    group.our_category.name.to_lowercase().contains(&needle)
        || group
            .our_category
            .parent
            .as_ref()
            .map(|p| p.to_lowercase().contains(&needle))
            .unwrap_or(false)
        || group
            .vendor_categories
            .iter()
            .any(|v| v.name.to_lowercase().contains(&needle))
}

/// Submission payload for the map endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRequest {
    pub our_category_id: String,
    pub vendor_category_ids: Vec<String>,
}

/// Validate the two selections and assemble the submission payload.
///
/// Only the first checked catalog category is used as the target; its
/// id is resolved against the catalog forest because checked entries
/// can carry flat references. Vendor ids are deduplicated in order.
pub fn build_mapping_request(
    our_selection: &Selection,
    vendor_selection: &Selection,
    our_forest: &[Category],
) -> Result<MappingRequest, String> {
    let target = our_selection
        .first()
        .ok_or_else(|| "Select one of our categories to map to".to_string())?;

    if vendor_selection.is_empty() {
        return Err("Select at least one vendor category".to_string());
    }

    let our_category_id = resolve_category_id(target, our_forest).ok_or_else(|| {
        format!("Category \"{}\" is missing from the catalog tree", target.name)
    })?;

    let mut vendor_category_ids: Vec<String> = Vec::new();
    for id in vendor_selection.ids() {
        if !vendor_category_ids.contains(&id) {
            vendor_category_ids.push(id);
        }
    }

    Ok(MappingRequest {
        our_category_id,
        vendor_category_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MappedOurCategory;

    fn record(our_id: Option<&str>, our_name: &str, vendor_id: &str, vendor_name: &str) -> MappingRecord {
        MappingRecord {
            our_category: MappedOurCategory {
                id: our_id.map(|s| s.to_string()),
                name: our_name.to_string(),
                parent: None,
            },
            vendor_category_id: vendor_id.to_string(),
            vendor_category_name: vendor_name.to_string(),
            product_count: None,
        }
    }

    #[test]
    fn test_grouping_merges_rows_with_same_our_category() {
        let records = vec![
            record(Some("C1"), "Shoes", "v1", "Footwear"),
            record(Some("C1"), "Shoes", "v2", "Trainers"),
        ];

        let groups = group_mappings(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].our_category.id, "C1");
        assert_eq!(groups[0].vendor_categories.len(), 2);
        assert_eq!(groups[0].vendor_categories[1].name, "Trainers");
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let records = vec![
            record(Some("C2"), "Bags", "v1", "Handbags"),
            record(Some("C1"), "Shoes", "v2", "Footwear"),
            record(Some("C2"), "Bags", "v3", "Luggage"),
        ];

        let groups = group_mappings(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].our_category.id, "C2");
        assert_eq!(groups[1].our_category.id, "C1");
    }

    #[test]
    fn test_grouping_skips_rows_without_our_id() {
        let records = vec![
            record(None, "", "v1", "Orphan"),
            record(Some("C1"), "Shoes", "v2", "Footwear"),
        ];

        let groups = group_mappings(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].vendor_categories.len(), 1);
    }

    #[test]
    fn test_group_search_matches_parent_and_vendor_names() {
        let mut group = GroupedMapping {
            our_category: GroupedOurCategory {
                id: "C1".to_string(),
                name: "Shoes".to_string(),
                parent: Some("Apparel".to_string()),
            },
            vendor_categories: vec![GroupedVendorCategory {
                id: "v1".to_string(),
                name: "Footwear".to_string(),
                product_count: None,
            }],
        };

        assert!(grouped_matches(&group, "shoe"));
        assert!(grouped_matches(&group, "apparel"));
        assert!(grouped_matches(&group, "FOOT"));
        assert!(!grouped_matches(&group, "garden"));
        assert!(grouped_matches(&group, ""));

        group.our_category.parent = None;
        assert!(!grouped_matches(&group, "apparel"));
    }

    #[test]
    fn test_request_requires_our_selection() {
        let ours = Selection::new();
        let mut vendors = Selection::new();
        vendors.toggle(&Category::new("V1", "Footwear"));

        let result = build_mapping_request(&ours, &vendors, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_requires_vendor_selection() {
        let mut ours = Selection::new();
        ours.toggle(&Category::new("C1", "Shoes"));

        let forest = vec![Category::new("C1", "Shoes")];
        let result = build_mapping_request(&ours, &Selection::new(), &forest);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_uses_first_target_and_dedupes_vendors() {
        let mut ours = Selection::new();
        ours.toggle(&Category::new("C1", "Shoes"));
        ours.toggle(&Category::new("C2", "Bags"));

        let mut vendors = Selection::new();
        vendors.toggle(&Category::new("V1", "Footwear"));
        vendors.toggle(&Category::new("V2", "Trainers"));

        let forest = vec![Category::new("C1", "Shoes"), Category::new("C2", "Bags")];
        let request = build_mapping_request(&ours, &vendors, &forest).unwrap();

        assert_eq!(request.our_category_id, "C1");
        assert_eq!(request.vendor_category_ids, vec!["V1".to_string(), "V2".to_string()]);
    }

    #[test]
    fn test_request_fails_when_target_not_in_forest() {
        let mut ours = Selection::new();
        ours.toggle(&Category::new("C9", "Ghost"));
        let mut vendors = Selection::new();
        vendors.toggle(&Category::new("V1", "Footwear"));

        let forest = vec![Category::new("C1", "Shoes")];
        assert!(build_mapping_request(&ours, &vendors, &forest).is_err());
    }
}
