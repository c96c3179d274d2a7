//! Tenant info fetch (PDF header branding)

use crate::{ClientResult, HttpClient};
use shared::models::StoreInfo;

impl HttpClient {
    /// GET /api/tenant/info
    pub async fn get_store_info(&self) -> ClientResult<StoreInfo> {
        self.get("/api/tenant/info").await
    }
}
