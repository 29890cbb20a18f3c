//! Tauri Commands for vendors

use tauri::State;

use crate::api::AdminApi;
use crate::domain::{allowed_vendors, Vendor};
use crate::AppState;

/// List the vendors open for category mapping.
///
/// The backend returns every registered supplier; the allow-list in
/// the domain layer trims it to the ones with mappable feeds.
#[tauri::command]
pub async fn get_vendor_list(state: State<'_, AppState>) -> Result<Vec<Vendor>, String> {
    state
        .api
        .vendors()
        .await
        .map(allowed_vendors)
        .map_err(|e| e.to_string())
}
