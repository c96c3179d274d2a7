//! Network seam for the layout controller

use async_trait::async_trait;
use backoffice_client::HttpClient;
use shared::error::AppResult;
use shared::models::{DiningTable, TablePosition, TablePositionUpdate};

/// The calls the layout controller makes against the backend.
///
/// Implemented by [`HttpClient`] in production and by recording mocks in
/// tests.
#[async_trait]
pub trait LayoutApi: Send + Sync {
    /// Fetch the layout (tables with positions) of one zone
    async fn fetch_zone_layout(&self, zone_id: &str) -> AppResult<Vec<DiningTable>>;

    /// Persist a single table's placement
    async fn update_position(&self, id: &str, position: TablePosition) -> AppResult<()>;

    /// Persist a batch of placements in one request
    async fn batch_update_positions(&self, updates: Vec<TablePositionUpdate>) -> AppResult<()>;
}

#[async_trait]
impl LayoutApi for HttpClient {
    async fn fetch_zone_layout(&self, zone_id: &str) -> AppResult<Vec<DiningTable>> {
        self.get_zone_layout(zone_id)
            .await
            .map_err(|e| e.to_app_error())
    }

    async fn update_position(&self, id: &str, position: TablePosition) -> AppResult<()> {
        self.update_table_position(id, &position)
            .await
            .map(|_| ())
            .map_err(|e| e.to_app_error())
    }

    async fn batch_update_positions(&self, updates: Vec<TablePositionUpdate>) -> AppResult<()> {
        HttpClient::batch_update_positions(self, &updates)
            .await
            .map(|_| ())
            .map_err(|e| e.to_app_error())
    }
}
