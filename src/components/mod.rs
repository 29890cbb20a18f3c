//! UI Components
//!
//! Reusable Leptos components.

mod category_section;
mod final_section;
mod mapped_table_section;
mod mapping_workspace;
mod pagination;
mod status_line;
mod tree_node;
mod unmap_confirm_button;
mod vendor_section;
mod vendor_tab_bar;

pub use category_section::CategorySection;
pub use final_section::FinalSection;
pub use mapped_table_section::MappedTableSection;
pub use mapping_workspace::MappingWorkspace;
pub use pagination::PaginationControls;
pub use status_line::{StatusLine, StatusMessage};
pub use tree_node::{CategoryTreeNode, SearchHitRow};
pub use unmap_confirm_button::UnmapConfirmButton;
pub use vendor_section::VendorSection;
pub use vendor_tab_bar::VendorTabBar;
