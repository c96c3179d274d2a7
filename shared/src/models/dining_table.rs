//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Table shape variants used by the floor-plan editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Rectangle,
    Circle,
    Oval,
}

/// Table occupancy status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Inactive,
}

/// Placement of a table on the floor plan.
///
/// The sentinel `{x: -1, y: -1}` means "unplaced / in the library":
/// the table exists but is not shown on the visible floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TablePosition {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Unplaced sentinel position (table in the library, not on the floor plan)
pub const UNPLACED: TablePosition = TablePosition {
    x: -1.0,
    y: -1.0,
    rotation: 0.0,
};

/// Normalize a rotation into the canonical `[0, 360)` range, rounded to
/// two decimal places. Every rotation that is stored or sent to the backend
/// passes through here, whatever its entry path (drag, manual edit, reset).
pub fn format_rotation(rotation: f64) -> f64 {
    let r = rotation % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    let r = (r * 100.0).round() / 100.0;
    // rounding 359.999... can land exactly on the excluded bound
    if r >= 360.0 { 0.0 } else { r }
}

impl TablePosition {
    /// Build a position with rotation defaulting to 0
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
        }
    }

    /// Build a position with an explicit rotation (normalized)
    pub fn with_rotation(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            rotation: format_rotation(rotation),
        }
    }

    /// Whether this is the unplaced sentinel
    pub fn is_unplaced(&self) -> bool {
        self.x == -1.0 && self.y == -1.0
    }

    /// Copy of this position with the rotation normalized
    pub fn normalized(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            rotation: format_rotation(self.rotation),
        }
    }
}

impl Default for TablePosition {
    fn default() -> Self {
        UNPLACED
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub display_name: String,
    pub zone_id: String,
    pub shape: TableShape,
    pub seat_count: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub position: TablePosition,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(length(min = 1, max = 32))]
    pub display_name: String,
    pub zone_id: String,
    pub shape: Option<TableShape>,
    #[validate(range(min = 1, max = 64))]
    pub seat_count: Option<u32>,
    /// Omitted means the table starts unplaced (in the library)
    pub position: Option<TablePosition>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[validate(length(min = 1, max = 32))]
    pub display_name: Option<String>,
    pub zone_id: Option<String>,
    pub shape: Option<TableShape>,
    #[validate(range(min = 1, max = 64))]
    pub seat_count: Option<u32>,
    pub status: Option<TableStatus>,
    pub position: Option<TablePosition>,
    pub is_active: Option<bool>,
}

/// One entry of the batch position upsert (`PUT /api/tables/positions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePositionUpdate {
    pub id: String,
    pub position: TablePosition,
}
