//! Tauri Commands for mapping operations
//!
//! Fetching the mapped list and creating/removing mapping edges.

use tauri::State;

use crate::api::AdminApi;
use crate::domain::MappingRecord;
use crate::AppState;

/// Fetch the flat mapping rows for a vendor
#[tauri::command]
pub async fn get_mapped_categories(
    state: State<'_, AppState>,
    vendor_id: String,
) -> Result<Vec<MappingRecord>, String> {
    state
        .api
        .mapped_categories(&vendor_id)
        .await
        .map_err(|e| e.to_string())
}

/// Map one of our categories to one or more vendor categories
#[tauri::command]
pub async fn map_vendor_category(
    state: State<'_, AppState>,
    our_category_id: String,
    vendor_category_ids: Vec<String>,
) -> Result<String, String> {
    if our_category_id.is_empty() {
        return Err("No catalog category selected".to_string());
    }
    if vendor_category_ids.is_empty() {
        return Err("No vendor categories selected".to_string());
    }

    log::info!(
        "mapping category {} to {} vendor categories",
        our_category_id,
        vendor_category_ids.len()
    );

    state
        .api
        .map_categories(&our_category_id, vendor_category_ids)
        .await
        .map_err(|e| e.to_string())
}

/// Remove the mapping edge for one vendor category
#[tauri::command]
pub async fn unmap_vendor_category(
    state: State<'_, AppState>,
    vendor_category_id: String,
) -> Result<String, String> {
    if vendor_category_id.is_empty() {
        return Err("No vendor category given".to_string());
    }

    log::info!("unmapping vendor category {}", vendor_category_id);

    state
        .api
        .unmap_category(&vendor_category_id)
        .await
        .map_err(|e| e.to_string())
}
