//! Tauri Commands for category trees
//!
//! Exposes the two taxonomy fetches to the frontend.

use tauri::State;

use crate::api::AdminApi;
use crate::domain::Category;
use crate::AppState;

/// Fetch our catalog's category forest
#[tauri::command]
pub async fn get_our_categories(state: State<'_, AppState>) -> Result<Vec<Category>, String> {
    state.api.our_categories().await.map_err(|e| e.to_string())
}

/// Fetch a vendor's category forest
#[tauri::command]
pub async fn get_vendor_categories(
    state: State<'_, AppState>,
    vendor_id: String,
) -> Result<Vec<Category>, String> {
    state
        .api
        .vendor_categories(&vendor_id)
        .await
        .map_err(|e| e.to_string())
}
