//! Tree Utilities
//!
//! Pure helpers for searching, resolving and paginating category
//! forests. Rendering stays in the components so everything here runs
//! in unit tests without a UI.

use crate::models::Category;

/// Default page size for category lists and the mapped table.
pub const PAGE_SIZE: usize = 20;

/// A search match together with the ancestors leading to it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub category: Category,
    /// Ancestor chain from root down to, but excluding, the match
    pub parent_path: Vec<Category>,
}

/// Find every node whose name contains `term`, case-insensitively.
///
/// An empty term yields one hit per root with its subtree untouched,
/// so callers can always render the result. A matching parent and a
/// matching descendant are both reported; recursion never stops at a
/// match.
pub fn search_categories(forest: &[Category], term: &str) -> Vec<SearchHit> {
    if term.is_empty() {
        return forest
            .iter()
            .map(|root| SearchHit {
                category: root.clone(),
                parent_path: Vec::new(),
            })
            .collect();
    }

    let needle = term.to_lowercase();
    let mut hits = Vec::new();
    let mut path: Vec<Category> = Vec::new();
    for root in forest {
        collect_matches(root, &needle, &mut path, &mut hits);
    }
    hits
}

fn collect_matches(
    node: &Category,
    needle: &str,
    path: &mut Vec<Category>,
    hits: &mut Vec<SearchHit>,
) {
    if node.name.to_lowercase().contains(needle) {
        hits.push(SearchHit {
            category: node.clone(),
            parent_path: path.clone(),
        });
    }
    path.push(node.clone());
    for child in &node.children {
        collect_matches(child, needle, path, hits);
    }
    path.pop();
}

/// Find a node by id anywhere in the forest, depth-first.
pub fn find_in_forest<'a>(forest: &'a [Category], id: &str) -> Option<&'a Category> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in_forest(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Resolve a possibly-shallow category reference to its id in `forest`.
///
/// Backend payloads are sometimes flat and sometimes nested. The
/// lookup runs in three tiers: root level for parentless candidates,
/// then inside the referenced parent's subtree, then an unrestricted
/// depth-first sweep of the whole forest.
pub fn resolve_category_id(candidate: &Category, forest: &[Category]) -> Option<String> {
    match &candidate.parent_id {
        None => {
            if let Some(root) = forest.iter().find(|c| c.id == candidate.id) {
                return Some(root.id.clone());
            }
        }
        Some(parent_id) => {
            if let Some(parent) = forest.iter().find(|c| &c.id == parent_id) {
                if let Some(found) = find_in_forest(&parent.children, &candidate.id) {
                    return Some(found.id.clone());
                }
            }
        }
    }

    find_in_forest(forest, &candidate.id).map(|c| c.id.clone())
}

/// One page of a flat list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total_pages: usize,
    pub items: Vec<T>,
}

/// Slice `items` into 1-indexed pages of `page_size`.
///
/// `total_pages` is at least 1 even for an empty list. Out-of-range
/// pages yield an empty slice rather than an error; callers reset to
/// page 1 whenever the filtered set changes.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = ((items.len() + page_size - 1) / page_size).max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let items = if page == 0 || start >= items.len() {
        Vec::new()
    } else {
        items[start..(start + page_size).min(items.len())].to_vec()
    };

    Page { total_pages, items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, name: &str) -> Category {
        Category::new(id, name)
    }

    fn branch(id: &str, name: &str, children: Vec<Category>) -> Category {
        Category {
            children,
            ..Category::new(id, name)
        }
    }

    fn sample_forest() -> Vec<Category> {
        vec![
            branch(
                "A",
                "Shoes",
                vec![
                    leaf("A1", "Sneakers"),
                    branch("A2", "Boots", vec![leaf("A2a", "Winter Boots")]),
                ],
            ),
            branch("B", "Accessories", vec![leaf("B1", "Belts")]),
        ]
    }

    #[test]
    fn test_search_finds_nested_match_with_parent_path() {
        let hits = search_categories(&sample_forest(), "sneak");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category.id, "A1");
        assert_eq!(hits[0].parent_path.len(), 1);
        assert_eq!(hits[0].parent_path[0].id, "A");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_categories(&sample_forest(), "WINTER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category.id, "A2a");
        let path: Vec<&str> = hits[0].parent_path.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(path, ["A", "A2"]);
    }

    #[test]
    fn test_search_reports_parent_and_descendant_independently() {
        let forest = vec![branch("A", "Boots", vec![leaf("A1", "Rain Boots")])];
        let hits = search_categories(&forest, "boots");

        let ids: Vec<&str> = hits.iter().map(|h| h.category.id.as_str()).collect();
        assert_eq!(ids, ["A", "A1"]);
    }

    #[test]
    fn test_search_empty_term_returns_forest_unchanged() {
        let forest = sample_forest();
        let hits = search_categories(&forest, "");

        assert_eq!(hits.len(), forest.len());
        for (hit, root) in hits.iter().zip(&forest) {
            assert_eq!(&hit.category, root);
            assert!(hit.parent_path.is_empty());
        }
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(search_categories(&sample_forest(), "garden").is_empty());
    }

    #[test]
    fn test_resolve_root_level_candidate() {
        let forest = sample_forest();
        let candidate = leaf("B", "Accessories");
        assert_eq!(resolve_category_id(&candidate, &forest), Some("B".to_string()));
    }

    #[test]
    fn test_resolve_nested_candidate_through_parent() {
        let forest = sample_forest();
        let candidate = Category {
            parent_id: Some("A".to_string()),
            ..Category::new("A2a", "")
        };
        assert_eq!(resolve_category_id(&candidate, &forest), Some("A2a".to_string()));
    }

    #[test]
    fn test_resolve_falls_back_on_unknown_parent() {
        let forest = sample_forest();
        // parent_id points nowhere, but the id exists deep in the tree
        let candidate = Category {
            parent_id: Some("missing".to_string()),
            ..Category::new("A2a", "")
        };
        assert_eq!(resolve_category_id(&candidate, &forest), Some("A2a".to_string()));
    }

    #[test]
    fn test_resolve_absent_id_is_none() {
        let forest = sample_forest();
        let candidate = leaf("nope", "");
        assert_eq!(resolve_category_id(&candidate, &forest), None);
    }

    #[test]
    fn test_paginate_splits_45_items_into_3_pages() {
        let items: Vec<u32> = (0..45).collect();

        let page1 = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.items.len(), 20);

        let page3 = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(page3.items.len(), 5);

        let page4 = paginate(&items, 4, PAGE_SIZE);
        assert!(page4.items.is_empty());
        assert_eq!(page4.total_pages, 3);
    }

    #[test]
    fn test_paginate_concatenation_reproduces_input() {
        let items: Vec<u32> = (0..53).collect();
        let total = paginate(&items, 1, 10).total_pages;

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(paginate(&items, page, 10).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_paginate_empty_list_still_has_one_page() {
        let page = paginate(&Vec::<u32>::new(), 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
