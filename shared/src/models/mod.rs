//! Data models
//!
//! Shared between the HTTP client and the back-office core.
//! All IDs are backend-owned strings.

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod menu_template;
pub mod modifier_group;
pub mod store_info;
pub mod zone;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use menu_item::*;
pub use menu_template::*;
pub use modifier_group::*;
pub use store_info::*;
pub use zone::*;
