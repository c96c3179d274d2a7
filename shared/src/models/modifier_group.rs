//! Modifier Group Model

use serde::{Deserialize, Serialize};

/// One selectable option inside a modifier group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierOption {
    pub id: String,
    pub name: String,
    /// Price delta in cents (may be negative)
    #[serde(default)]
    pub price_delta: i64,
}

/// Modifier group entity (read-only list surface in the back office)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Vec<ModifierOption>,
    #[serde(default)]
    pub min_select: u32,
    #[serde(default)]
    pub max_select: u32,
}
