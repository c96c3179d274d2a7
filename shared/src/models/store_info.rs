//! Store Info Model

use serde::{Deserialize, Serialize};

/// Tenant/store information (singleton per tenant), used for PDF branding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default)]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}
