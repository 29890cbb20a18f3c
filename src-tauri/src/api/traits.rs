//! Admin Backend Operations
//!
//! Abstract interface over the admin backend's category-mapping
//! endpoints. Command handlers call through this trait; tests can
//! substitute a stub.

use async_trait::async_trait;

use crate::domain::{Category, DomainResult, MappingRecord, Vendor};

/// Category-mapping operations exposed by the admin backend
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Our catalog's category forest
    async fn our_categories(&self) -> DomainResult<Vec<Category>>;

    /// A vendor's category forest, with product counts
    async fn vendor_categories(&self, vendor_id: &str) -> DomainResult<Vec<Category>>;

    /// Existing mappings for a vendor, flat, one row per pair
    async fn mapped_categories(&self, vendor_id: &str) -> DomainResult<Vec<MappingRecord>>;

    /// Map one of our categories to the given vendor categories.
    /// Returns the backend's confirmation message.
    async fn map_categories(
        &self,
        our_category_id: &str,
        vendor_category_ids: Vec<String>,
    ) -> DomainResult<String>;

    /// Remove the mapping edge for one vendor category.
    /// Returns the backend's confirmation message.
    async fn unmap_category(&self, vendor_category_id: &str) -> DomainResult<String>;

    /// Every vendor registered on the platform (unfiltered)
    async fn vendors(&self) -> DomainResult<Vec<Vendor>>;
}
