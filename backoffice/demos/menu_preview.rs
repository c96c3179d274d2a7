//! Offline demo: paginate a sample menu and print the resulting page
//! structure for every template.
//!
//! Run with `cargo run -p backoffice --example menu_preview`.

use anyhow::Result;
use backoffice::menu::{CategoryGroup, paginate, render_export, render_preview};
use shared::models::{Category, MenuItem, MenuTemplate, StoreInfo};
use tracing_subscriber::EnvFilter;

fn item(id: &str, name: &str, price: i64, category: &str) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        price,
        description: None,
        images: vec![],
        category_id: category.into(),
        is_chef_recommendation: false,
        sort_order: 0,
        is_active: true,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let categories = vec![
        Category { id: "c1".into(), name: "Starters".into(), sort_order: 0, item_count: 6, is_active: true },
        Category { id: "c2".into(), name: "Mains".into(), sort_order: 1, item_count: 10, is_active: true },
        Category { id: "c3".into(), name: "Desserts".into(), sort_order: 2, item_count: 4, is_active: true },
    ];

    let groups = vec![
        CategoryGroup::new("c1", (0..6).map(|i| item(&format!("s{i}"), &format!("Starter {i}"), 850 + i * 50, "c1")).collect()),
        CategoryGroup::new("c2", (0..10).map(|i| item(&format!("m{i}"), &format!("Main {i}"), 1450 + i * 100, "c2")).collect()),
        CategoryGroup::new("c3", (0..4).map(|i| item(&format!("d{i}"), &format!("Dessert {i}"), 650, "c3")).collect()),
    ];

    let store = StoreInfo {
        name: "La Marea".into(),
        address: Some("Calle Mayor 1, Madrid".into()),
        phone: Some("+34 600 000 000".into()),
        ..Default::default()
    };

    for template in [
        MenuTemplate::Classic,
        MenuTemplate::Minimal,
        MenuTemplate::Dense,
        MenuTemplate::TriFold,
    ] {
        let pages = paginate(&groups, template);
        let preview = render_preview(&pages, &categories, &store, template);
        let ops = render_export(&pages, &categories, &store, template);

        println!("== {} ==", template.display_name());
        for page in &preview.pages {
            let sections: Vec<String> = page
                .sections
                .iter()
                .map(|s| format!("{} ({})", s.category_name, s.items.len()))
                .collect();
            println!("  page {}: {}", page.number, sections.join(", "));
        }
        println!("  export ops: {}", ops.len());
    }

    Ok(())
}
