//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the admin
//! backend client.

mod category_cmd;
mod mapping_cmd;
mod vendor_cmd;

pub use category_cmd::*;
pub use mapping_cmd::*;
pub use vendor_cmd::*;
