//! Menu Template Model

use serde::{Deserialize, Serialize};

/// Per-page item capacity used when a template id is unknown
pub const DEFAULT_PAGE_CAPACITY: usize = 15;

/// The fixed set of built-in print menu templates.
///
/// Each template declares how many menu items fit on one page before the
/// pagination engine splits content. Capacities are empirical constants
/// tuned against the rendered layouts, not measured at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuTemplate {
    /// Template 1: single column with item images
    Classic,
    /// Template 2: large type, generous whitespace
    Minimal,
    /// Template 3: compact two-column listing
    Dense,
    /// Template 4: tri-fold; paginates by splitting the category list
    /// into thirds instead of counting items
    TriFold,
}

impl MenuTemplate {
    /// Look up a template by its numeric id (1-4)
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Classic),
            2 => Some(Self::Minimal),
            3 => Some(Self::Dense),
            4 => Some(Self::TriFold),
            _ => None,
        }
    }

    /// Numeric id of this template
    pub fn id(&self) -> u8 {
        match self {
            Self::Classic => 1,
            Self::Minimal => 2,
            Self::Dense => 3,
            Self::TriFold => 4,
        }
    }

    /// Items that fit on one page; `None` means the template does not
    /// paginate by item count (tri-fold splits categories instead)
    pub fn page_capacity(&self) -> Option<usize> {
        match self {
            Self::Classic => Some(16),
            Self::Minimal => Some(8),
            Self::Dense => Some(20),
            Self::TriFold => None,
        }
    }

    /// Display name shown in the template picker
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Minimal => "Minimal",
            Self::Dense => "Dense",
            Self::TriFold => "Tri-Fold",
        }
    }
}
