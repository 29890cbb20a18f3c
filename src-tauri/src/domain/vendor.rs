//! Vendor Entity
//!
//! A supplier whose product feed carries its own category taxonomy.

use super::entity::Entity;
use serde::{Deserialize, Serialize};

/// Vendors currently onboarded for category mapping. The backend's
/// vendor list contains every registered supplier; only these ids are
/// shown in the mapping workspace.
pub const ALLOWED_VENDOR_IDS: [&str; 3] = ["1", "2", "4"];

/// A product vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
}

impl Entity for Vendor {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Keep only the vendors that are open for mapping, in backend order.
pub fn allowed_vendors(vendors: Vec<Vendor>) -> Vec<Vendor> {
    vendors
        .into_iter()
        .filter(|v| ALLOWED_VENDOR_IDS.contains(&v.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str, name: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_allow_list_filters_unknown_vendors() {
        let vendors = vec![
            vendor("1", "Northwind"),
            vendor("3", "Closed Supplier"),
            vendor("4", "Contoso"),
        ];

        let allowed = allowed_vendors(vendors);
        assert_eq!(allowed.len(), 2);
        assert_eq!(allowed[0].id, "1");
        assert_eq!(allowed[1].id, "4");
    }

    #[test]
    fn test_allow_list_preserves_order() {
        let vendors = vec![vendor("4", "Contoso"), vendor("1", "Northwind")];
        let allowed = allowed_vendors(vendors);
        assert_eq!(allowed[0].id, "4");
    }
}
