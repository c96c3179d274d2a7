//! Zone Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Zone entity (a named floor area: hall, terrace, private room, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    /// Number of tables assigned to this zone (server derived)
    #[serde(default)]
    pub table_count: u32,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ZoneCreate {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ZoneUpdate {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    pub description: Option<String>,
}
