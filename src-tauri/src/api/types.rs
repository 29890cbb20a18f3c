//! Wire Types and Normalization
//!
//! Raw shapes as the admin backend actually sends them, and the
//! adapter functions that fold them into domain entities. The backend
//! is inconsistent about product-count key names (`product_count`,
//! `productCount`, `count`, `products_count`) and occasionally omits
//! names or our-category ids; all of that is absorbed here.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, DomainError, DomainResult, MappedOurCategory, MappingRecord, Vendor};

/// Standard response envelope: `error` carries a business error,
/// `success`/`message` report command outcomes, `data` the payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload of a fetch response.
    pub fn into_data(self, what: &str) -> DomainResult<T> {
        if let Some(err) = self.error {
            return Err(DomainError::Backend(err));
        }
        if self.success == Some(false) {
            let msg = self.message.unwrap_or_else(|| format!("{} request failed", what));
            return Err(DomainError::Backend(msg));
        }
        self.data
            .ok_or_else(|| DomainError::Internal(format!("{} response carried no data", what)))
    }

    /// Unwrap a mutation response, keeping only the backend message.
    pub fn into_ack(self, what: &str) -> DomainResult<String> {
        if let Some(err) = self.error {
            return Err(DomainError::Backend(err));
        }
        match self.success {
            Some(false) => {
                let msg = self.message.unwrap_or_else(|| format!("{} request failed", what));
                Err(DomainError::Backend(msg))
            }
            _ => Ok(self.message.unwrap_or_else(|| format!("{} done", what))),
        }
    }
}

// ========================
// Categories
// ========================

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<RawCategory>,
    pub product_count: Option<u64>,
    #[serde(rename = "productCount")]
    pub product_count_camel: Option<u64>,
    pub count: Option<u64>,
}

/// Fold one raw node (and its subtree) into a canonical [`Category`].
pub fn normalize_category(raw: RawCategory) -> Category {
    Category {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        parent_id: raw.parent_id,
        children: raw.children.into_iter().map(normalize_category).collect(),
        product_count: raw.product_count.or(raw.product_count_camel).or(raw.count),
    }
}

pub fn normalize_forest(raw: Vec<RawCategory>) -> Vec<Category> {
    raw.into_iter().map(normalize_category).collect()
}

// ========================
// Mappings
// ========================

#[derive(Debug, Deserialize)]
pub struct RawParentName {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMappedOurCategory {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent: Option<RawParentName>,
}

#[derive(Debug, Deserialize)]
pub struct RawMappingRecord {
    pub our_category: Option<RawMappedOurCategory>,
    pub vendor_category_id: String,
    pub vendor_category_name: Option<String>,
    pub product_count: Option<u64>,
    #[serde(rename = "productCount")]
    pub product_count_camel: Option<u64>,
    pub products_count: Option<u64>,
    pub count: Option<u64>,
}

/// Mapped-list payload; the flat rows live under a second `data` key.
#[derive(Debug, Deserialize)]
pub struct MappedPayload {
    #[serde(default)]
    pub data: Vec<RawMappingRecord>,
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
}

pub fn normalize_record(raw: RawMappingRecord) -> MappingRecord {
    let our = raw.our_category.unwrap_or(RawMappedOurCategory {
        id: None,
        name: None,
        parent: None,
    });
    MappingRecord {
        our_category: MappedOurCategory {
            id: our.id,
            name: our.name.unwrap_or_default(),
            parent: our.parent.and_then(|p| p.name),
        },
        vendor_category_id: raw.vendor_category_id,
        vendor_category_name: raw.vendor_category_name.unwrap_or_default(),
        product_count: raw
            .product_count
            .or(raw.product_count_camel)
            .or(raw.products_count)
            .or(raw.count),
    }
}

// ========================
// Vendors
// ========================

#[derive(Debug, Deserialize)]
pub struct RawVendor {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VendorsPayload {
    #[serde(default)]
    pub vendors: Vec<RawVendor>,
}

pub fn normalize_vendor(raw: RawVendor) -> Vendor {
    Vendor {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
    }
}

// ========================
// Request bodies
// ========================

/// Body for `/admin/map-vendor-category`. The backend expects the
/// vendor id *array* under the singular key.
#[derive(Debug, Serialize)]
pub struct MapCategoriesBody {
    pub our_category_id: String,
    pub vendor_category_id: Vec<String>,
}

/// Body for `/admin/unmap-vendor-category`
#[derive(Debug, Serialize)]
pub struct UnmapCategoryBody {
    pub vendor_category_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_aliases_normalize_to_product_count() {
        for key in ["product_count", "productCount", "count"] {
            let payload = format!(r#"{{ "id": "v1", "name": "Footwear", "{}": 7 }}"#, key);
            let raw: RawCategory = serde_json::from_str(&payload).unwrap();
            let category = normalize_category(raw);
            assert_eq!(category.product_count, Some(7), "alias {}", key);
        }
    }

    #[test]
    fn test_snake_case_count_wins_over_aliases() {
        let raw: RawCategory = serde_json::from_value(json!({
            "id": "v1",
            "name": "Footwear",
            "product_count": 3,
            "count": 9
        }))
        .unwrap();
        assert_eq!(normalize_category(raw).product_count, Some(3));
    }

    #[test]
    fn test_nested_children_normalize_recursively() {
        let raw: RawCategory = serde_json::from_value(json!({
            "id": "a",
            "name": "Shoes",
            "children": [
                { "id": "a1", "name": "Sneakers", "children": [{ "id": "a1x", "count": 2 }] }
            ]
        }))
        .unwrap();

        let category = normalize_category(raw);
        assert_eq!(category.children.len(), 1);
        assert_eq!(category.children[0].children[0].id, "a1x");
        // Missing name becomes empty, never a parse failure.
        assert_eq!(category.children[0].children[0].name, "");
        assert_eq!(category.children[0].children[0].product_count, Some(2));
    }

    #[test]
    fn test_envelope_error_field_wins() {
        let envelope: Envelope<Vec<RawCategory>> = serde_json::from_value(json!({
            "success": true,
            "error": "vendor feed unavailable",
            "data": []
        }))
        .unwrap();

        match envelope.into_data("vendor categories") {
            Err(DomainError::Backend(msg)) => assert_eq!(msg, "vendor feed unavailable"),
            other => panic!("expected backend error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_envelope_success_false_uses_message() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(json!({
            "success": false,
            "message": "category already mapped"
        }))
        .unwrap();

        match envelope.into_ack("map") {
            Err(DomainError::Backend(msg)) => assert_eq!(msg, "category already mapped"),
            other => panic!("expected backend error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_envelope_missing_data_is_internal() {
        let envelope: Envelope<Vec<RawCategory>> =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(
            envelope.into_data("our categories"),
            Err(DomainError::Internal(_))
        ));
    }

    #[test]
    fn test_ack_returns_backend_message() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "success": true, "message": "mapped 3 categories" }))
                .unwrap();
        assert_eq!(envelope.into_ack("map").unwrap(), "mapped 3 categories");
    }

    #[test]
    fn test_mapped_payload_unwraps_nested_rows() {
        let envelope: Envelope<MappedPayload> = serde_json::from_value(json!({
            "success": true,
            "data": {
                "data": [
                    {
                        "our_category": { "id": "c1", "name": "Shoes", "parent": { "name": "Apparel" } },
                        "vendor_category_id": "v9",
                        "vendor_category_name": "Footwear",
                        "products_count": 12
                    },
                    {
                        "vendor_category_id": "v10",
                        "vendor_category_name": "Socks"
                    }
                ],
                "totalPages": 4
            }
        }))
        .unwrap();

        let payload = envelope.into_data("mapped categories").unwrap();
        assert_eq!(payload.total_pages, Some(4));

        let records: Vec<_> = payload.data.into_iter().map(normalize_record).collect();
        assert_eq!(records[0].our_category.parent.as_deref(), Some("Apparel"));
        assert_eq!(records[0].product_count, Some(12));
        // A row without our_category keeps flowing with id = None.
        assert_eq!(records[1].our_category.id, None);
        assert_eq!(records[1].our_category.name, "");
    }

    #[test]
    fn test_map_body_serializes_array_under_singular_key() {
        let body = MapCategoriesBody {
            our_category_id: "c1".to_string(),
            vendor_category_id: vec!["v1".to_string(), "v2".to_string()],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["vendor_category_id"], json!(["v1", "v2"]));
        assert_eq!(value["our_category_id"], json!("c1"));
    }
}
