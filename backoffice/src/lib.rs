//! Restaurant back-office core
//!
//! Headless logic behind the back-office screens:
//!
//! - [`layout`]: floor-plan layout reconciliation (working copy of table
//!   positions, pending-change tracking, batch save, reset) and the table
//!   sizing bands
//! - [`menu`]: print-menu pagination engine plus the preview and PDF-export
//!   renderers that share its output
//! - [`qr`]: QR asset downloads (backend-rendered blobs)
//! - [`import`]: bulk menu import upload
//!
//! The rendered UI and the PDF raster backend are external; everything here
//! is plain state and arithmetic driven by the REST client.

pub mod import;
pub mod layout;
pub mod menu;
pub mod qr;

pub use backoffice_client;
pub use shared;

pub use layout::{LayoutApi, LayoutController, calculate_table_size};
pub use menu::{CategoryGroup, MenuPage, paginate};
