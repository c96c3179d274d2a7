//! Zone API calls

use crate::{ClientResult, HttpClient};
use shared::models::{DiningTable, Zone, ZoneCreate, ZoneUpdate};
use validator::Validate;

impl HttpClient {
    /// GET /api/zones - all zones with table counts
    pub async fn list_zones(&self) -> ClientResult<Vec<Zone>> {
        self.get("/api/zones").await
    }

    /// GET /api/zones/simple - id/name pairs for pickers
    pub async fn list_zones_simple(&self) -> ClientResult<Vec<Zone>> {
        self.get("/api/zones/simple").await
    }

    /// GET /api/zones/{id}
    pub async fn get_zone(&self, id: &str) -> ClientResult<Zone> {
        self.get(&format!("/api/zones/{}", id)).await
    }

    /// GET /api/zones/{id}/tables - the zone's floor-plan layout
    pub async fn get_zone_layout(&self, id: &str) -> ClientResult<Vec<DiningTable>> {
        self.get(&format!("/api/zones/{}/tables", id)).await
    }

    /// POST /api/zones
    pub async fn create_zone(&self, data: &ZoneCreate) -> ClientResult<Zone> {
        data.validate()?;
        self.post("/api/zones", data).await
    }

    /// PUT /api/zones/{id}
    pub async fn update_zone(&self, id: &str, data: &ZoneUpdate) -> ClientResult<Zone> {
        data.validate()?;
        self.put(&format!("/api/zones/{}", id), data).await
    }

    /// DELETE /api/zones/{id}
    pub async fn delete_zone(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/zones/{}", id)).await
    }
}
