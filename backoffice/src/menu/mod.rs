//! Print-menu pagination and rendering
//!
//! [`pagination`] partitions the menu into template-sized pages exactly
//! once; [`preview`] and [`export`] both consume that output, which is what
//! guarantees the on-screen preview and the exported PDF stay in lockstep.

pub mod document;
pub mod export;
pub mod pagination;
pub mod preview;

pub use document::{DocOp, MenuDocBuilder, format_price};
pub use export::render_export;
pub use pagination::{CategoryGroup, MenuPage, paginate, paginate_by_template_id};
pub use preview::{PreviewDocument, render_preview};
