//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Image attached to a menu item. Order in the vector is display order;
/// at most one image is flagged primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub description: Option<String>,
    /// Ordered image list, one flagged primary
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Category reference
    pub category_id: String,
    #[serde(default)]
    pub is_chef_recommendation: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// The primary image, falling back to the first one
    pub fn primary_image(&self) -> Option<&ImageRef> {
        self.images
            .iter()
            .find(|i| i.is_primary)
            .or_else(|| self.images.first())
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    pub description: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub is_chef_recommendation: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuItemUpdate {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub images: Option<Vec<ImageRef>>,
    pub is_chef_recommendation: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_images(images: Vec<ImageRef>) -> MenuItem {
        MenuItem {
            id: "mi_1".into(),
            name: "Paella".into(),
            price: 1850,
            description: None,
            images,
            category_id: "cat_1".into(),
            is_chef_recommendation: false,
            sort_order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_primary_image_flagged() {
        let item = item_with_images(vec![
            ImageRef { url: "a.jpg".into(), is_primary: false },
            ImageRef { url: "b.jpg".into(), is_primary: true },
        ]);
        assert_eq!(item.primary_image().unwrap().url, "b.jpg");
    }

    #[test]
    fn test_primary_image_fallback_first() {
        let item = item_with_images(vec![
            ImageRef { url: "a.jpg".into(), is_primary: false },
            ImageRef { url: "b.jpg".into(), is_primary: false },
        ]);
        assert_eq!(item.primary_image().unwrap().url, "a.jpg");
        assert!(item_with_images(vec![]).primary_image().is_none());
    }
}
