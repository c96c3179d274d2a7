//! Dining table API calls

use crate::{ClientResult, HttpClient};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, TablePosition, TablePositionUpdate,
};
use validator::Validate;

impl HttpClient {
    /// GET /api/tables/{id}
    pub async fn get_table(&self, id: &str) -> ClientResult<DiningTable> {
        self.get(&format!("/api/tables/{}", id)).await
    }

    /// POST /api/tables
    pub async fn create_table(&self, data: &DiningTableCreate) -> ClientResult<DiningTable> {
        data.validate()?;
        self.post("/api/tables", data).await
    }

    /// PUT /api/tables/{id}
    pub async fn update_table(
        &self,
        id: &str,
        data: &DiningTableUpdate,
    ) -> ClientResult<DiningTable> {
        data.validate()?;
        self.put(&format!("/api/tables/{}", id), data).await
    }

    /// PUT /api/tables/{id}/position - persist one table's placement
    pub async fn update_table_position(
        &self,
        id: &str,
        position: &TablePosition,
    ) -> ClientResult<DiningTable> {
        self.put(&format!("/api/tables/{}/position", id), position)
            .await
    }

    /// PUT /api/tables/positions - batch upsert of pending placements
    pub async fn batch_update_positions(
        &self,
        updates: &[TablePositionUpdate],
    ) -> ClientResult<Vec<DiningTable>> {
        self.put("/api/tables/positions", &updates).await
    }

    /// DELETE /api/tables/{id}
    pub async fn delete_table(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/tables/{}", id)).await
    }
}
