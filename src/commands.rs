//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. Backend errors come through
//! as rejected promises carrying the error string, so every wrapper
//! catches and forwards the message.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{Category, MappingRecord, Vendor};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn invoke_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| "backend call failed".to_string())
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct VendorIdArgs<'a> {
    #[serde(rename = "vendorId")]
    pub vendor_id: &'a str,
}

#[derive(Serialize)]
pub struct MapCategoryArgs<'a> {
    #[serde(rename = "ourCategoryId")]
    pub our_category_id: &'a str,
    #[serde(rename = "vendorCategoryIds")]
    pub vendor_category_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct UnmapCategoryArgs<'a> {
    #[serde(rename = "vendorCategoryId")]
    pub vendor_category_id: &'a str,
}

// ========================
// Category Commands
// ========================

pub async fn get_our_categories() -> Result<Vec<Category>, String> {
    let result = invoke("get_our_categories", JsValue::NULL)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_vendor_categories(vendor_id: &str) -> Result<Vec<Category>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&VendorIdArgs { vendor_id }).map_err(|e| e.to_string())?;
    let result = invoke("get_vendor_categories", js_args)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Mapping Commands
// ========================

pub async fn get_mapped_categories(vendor_id: &str) -> Result<Vec<MappingRecord>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&VendorIdArgs { vendor_id }).map_err(|e| e.to_string())?;
    let result = invoke("get_mapped_categories", js_args)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Returns the backend's confirmation message.
pub async fn map_vendor_category(
    our_category_id: &str,
    vendor_category_ids: Vec<String>,
) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&MapCategoryArgs {
        our_category_id,
        vendor_category_ids,
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("map_vendor_category", js_args)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Returns the backend's confirmation message.
pub async fn unmap_vendor_category(vendor_category_id: &str) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&UnmapCategoryArgs { vendor_category_id })
        .map_err(|e| e.to_string())?;
    let result = invoke("unmap_vendor_category", js_args)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Vendor Commands
// ========================

pub async fn get_vendor_list() -> Result<Vec<Vendor>, String> {
    let result = invoke("get_vendor_list", JsValue::NULL)
        .await
        .map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
