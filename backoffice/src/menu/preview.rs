//! On-screen preview rendering
//!
//! Produces the display model the preview pane binds to. Consumes the same
//! pagination output as the PDF export; only the styling primitives differ.

use serde::{Deserialize, Serialize};
use shared::models::{Category, MenuTemplate, StoreInfo};

use super::document::format_price;
use super::pagination::MenuPage;

/// One item row in the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewItem {
    pub name: String,
    pub price_text: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub chef_recommendation: bool,
}

/// One category block on a preview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSection {
    pub category_id: String,
    pub category_name: String,
    pub items: Vec<PreviewItem>,
}

/// One rendered preview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewPage {
    /// 1-based page number
    pub number: usize,
    pub sections: Vec<PreviewSection>,
}

/// The whole preview document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDocument {
    pub template: MenuTemplate,
    pub store_name: String,
    pub pages: Vec<PreviewPage>,
}

pub(crate) fn category_name<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(id)
}

/// Render paginated pages into the preview display model
pub fn render_preview(
    pages: &[MenuPage],
    categories: &[Category],
    store: &StoreInfo,
    template: MenuTemplate,
) -> PreviewDocument {
    let rendered = pages
        .iter()
        .enumerate()
        .map(|(idx, page)| PreviewPage {
            number: idx + 1,
            sections: page
                .groups
                .iter()
                .map(|group| PreviewSection {
                    category_id: group.category_id.clone(),
                    category_name: category_name(categories, &group.category_id).to_string(),
                    items: group
                        .items
                        .iter()
                        .map(|item| PreviewItem {
                            name: item.name.clone(),
                            price_text: format_price(item.price),
                            description: item.description.clone(),
                            image_url: item.primary_image().map(|i| i.url.clone()),
                            chef_recommendation: item.is_chef_recommendation,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    PreviewDocument {
        template,
        store_name: store.name.clone(),
        pages: rendered,
    }
}
