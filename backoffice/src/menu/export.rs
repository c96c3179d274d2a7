//! PDF export rendering
//!
//! Turns paginated pages into the [`DocOp`] stream handed to the PDF
//! backend. Must consume the exact same pagination output as the preview;
//! the partitioning itself happens once, upstream of both.

use chrono::Local;
use shared::models::{Category, MenuTemplate, StoreInfo};

use super::document::{DocOp, MenuDocBuilder};
use super::pagination::MenuPage;
use super::preview::category_name;

/// Suggested download file name for the exported PDF
pub fn export_file_name(store: &StoreInfo, template: MenuTemplate) -> String {
    let date = Local::now().format("%Y%m%d");
    let stem = if store.name.is_empty() {
        "menu".to_string()
    } else {
        store.name.to_lowercase().replace(' ', "-")
    };
    format!("{}-menu-{}-{}.pdf", stem, template.display_name().to_lowercase(), date)
}

/// Render paginated pages into the export op stream
pub fn render_export(
    pages: &[MenuPage],
    categories: &[Category],
    store: &StoreInfo,
    template: MenuTemplate,
) -> Vec<DocOp> {
    let mut doc = MenuDocBuilder::new();

    doc.heading(store.name.clone(), 1);
    if let Some(address) = &store.address {
        doc.subtitle(address.clone());
    }
    if let Some(phone) = &store.phone {
        doc.subtitle(format!("Tel: {}", phone));
    }
    doc.divider();

    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            doc.page_break();
        }
        for group in &page.groups {
            doc.category(category_name(categories, &group.category_id));
            for item in &group.items {
                doc.item(
                    item.name.clone(),
                    item.price,
                    item.description.clone(),
                    item.primary_image().map(|i| i.url.clone()),
                    item.is_chef_recommendation,
                );
            }
            doc.divider();
        }
    }

    tracing::debug!(
        pages = pages.len(),
        template = template.display_name(),
        "menu export rendered"
    );
    doc.into_ops()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::pagination::{CategoryGroup, paginate};
    use crate::menu::preview::render_preview;
    use shared::models::MenuItem;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("Item {}", id),
            price: 1100,
            description: Some("house specialty".into()),
            images: vec![],
            category_id: category.into(),
            is_chef_recommendation: false,
            sort_order: 0,
            is_active: true,
        }
    }

    fn sample_groups() -> Vec<CategoryGroup> {
        vec![
            CategoryGroup::new(
                "starters",
                (0..7).map(|i| item(&format!("s{}", i), "starters")).collect(),
            ),
            CategoryGroup::new(
                "mains",
                (0..13).map(|i| item(&format!("m{}", i), "mains")).collect(),
            ),
        ]
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { id: "starters".into(), name: "Starters".into(), sort_order: 0, item_count: 7, is_active: true },
            Category { id: "mains".into(), name: "Mains".into(), sort_order: 1, item_count: 13, is_active: true },
        ]
    }

    #[test]
    fn preview_and_export_share_page_structure() {
        let pages = paginate(&sample_groups(), MenuTemplate::Classic);
        let store = StoreInfo { name: "La Marea".into(), ..Default::default() };

        let preview = render_preview(&pages, &categories(), &store, MenuTemplate::Classic);
        let ops = render_export(&pages, &categories(), &store, MenuTemplate::Classic);

        // same page count: preview pages vs page-break-separated export
        let export_pages = ops.iter().filter(|op| matches!(op, DocOp::PageBreak)).count() + 1;
        assert_eq!(preview.pages.len(), export_pages);

        // same item sequence
        let preview_items: Vec<&str> = preview
            .pages
            .iter()
            .flat_map(|p| p.sections.iter())
            .flat_map(|s| s.items.iter())
            .map(|i| i.name.as_str())
            .collect();
        let export_items: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                DocOp::ItemLine { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(preview_items, export_items);
    }

    #[test]
    fn export_carries_store_branding() {
        let pages = paginate(&sample_groups(), MenuTemplate::Dense);
        let store = StoreInfo {
            name: "La Marea".into(),
            address: Some("Calle Mayor 1".into()),
            ..Default::default()
        };
        let ops = render_export(&pages, &categories(), &store, MenuTemplate::Dense);

        assert_eq!(ops[0], DocOp::Heading { text: "La Marea".into(), level: 1 });
        assert!(matches!(&ops[1], DocOp::Subtitle { text } if text == "Calle Mayor 1"));
    }

    #[test]
    fn unknown_category_falls_back_to_id() {
        let groups = vec![CategoryGroup::new("ghost", vec![item("x", "ghost")])];
        let pages = paginate(&groups, MenuTemplate::Minimal);
        let ops = render_export(&pages, &[], &StoreInfo::default(), MenuTemplate::Minimal);
        assert!(ops.iter().any(
            |op| matches!(op, DocOp::CategoryHeader { name } if name == "ghost")
        ));
    }
}
