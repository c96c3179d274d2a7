//! Floor-plan layout editing

mod api;
mod controller;
mod geometry;

pub use api::LayoutApi;
pub use controller::{LayoutController, PositionEdit, TableEdit};
pub use geometry::{TableSize, calculate_table_size};
