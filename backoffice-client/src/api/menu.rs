//! Menu API calls (categories, items, modifier groups)

use crate::{ClientResult, HttpClient};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    ModifierGroup,
};
use validator::Validate;

impl HttpClient {
    // ============ Categories ============

    /// GET /api/categories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    /// POST /api/categories
    pub async fn create_category(&self, data: &CategoryCreate) -> ClientResult<Category> {
        data.validate()?;
        self.post("/api/categories", data).await
    }

    /// PUT /api/categories/{id}
    pub async fn update_category(
        &self,
        id: &str,
        data: &CategoryUpdate,
    ) -> ClientResult<Category> {
        data.validate()?;
        self.put(&format!("/api/categories/{}", id), data).await
    }

    /// DELETE /api/categories/{id}
    pub async fn delete_category(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/categories/{}", id)).await
    }

    // ============ Menu items ============

    /// GET /api/menu-items
    pub async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/api/menu-items").await
    }

    /// GET /api/menu-items?category={id}
    pub async fn list_menu_items_by_category(
        &self,
        category_id: &str,
    ) -> ClientResult<Vec<MenuItem>> {
        self.get(&format!("/api/menu-items?category={}", category_id))
            .await
    }

    /// GET /api/menu-items/{id}
    pub async fn get_menu_item(&self, id: &str) -> ClientResult<MenuItem> {
        self.get(&format!("/api/menu-items/{}", id)).await
    }

    /// POST /api/menu-items
    pub async fn create_menu_item(&self, data: &MenuItemCreate) -> ClientResult<MenuItem> {
        data.validate()?;
        self.post("/api/menu-items", data).await
    }

    /// PUT /api/menu-items/{id}
    pub async fn update_menu_item(
        &self,
        id: &str,
        data: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        data.validate()?;
        self.put(&format!("/api/menu-items/{}", id), data).await
    }

    /// DELETE /api/menu-items/{id}
    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/menu-items/{}", id)).await
    }

    // ============ Modifier groups ============

    /// GET /api/modifier-groups
    pub async fn list_modifier_groups(&self) -> ClientResult<Vec<ModifierGroup>> {
        self.get("/api/modifier-groups").await
    }
}
