//! Menu pagination engine
//!
//! Splits items grouped by category into pages that fit a template's
//! per-page item capacity. This is arithmetic content-flow over empirical
//! capacity constants, not a layout solver: nothing is measured at render
//! time.

use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, MenuTemplate};
use shared::models::menu_template::DEFAULT_PAGE_CAPACITY;

/// Items of one category, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category_id: String,
    pub items: Vec<MenuItem>,
}

impl CategoryGroup {
    pub fn new(category_id: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self { category_id: category_id.into(), items }
    }
}

/// One page of the paginated menu: a (possibly partial) regrouping of
/// categories to items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPage {
    pub groups: Vec<CategoryGroup>,
}

impl MenuPage {
    /// Total item count on this page
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Partition `groups` into pages for `template`.
///
/// Category-then-item order of the input is preserved across the whole
/// sequence of pages. The tri-fold template paginates by splitting the
/// category list into thirds; every other template paginates by item
/// count.
pub fn paginate(groups: &[CategoryGroup], template: MenuTemplate) -> Vec<MenuPage> {
    match template.page_capacity() {
        Some(capacity) => paginate_by_items(groups, capacity),
        None => paginate_trifold(groups),
    }
}

/// Partition using a raw template id; unknown ids fall back to the default
/// capacity.
pub fn paginate_by_template_id(groups: &[CategoryGroup], template_id: u8) -> Vec<MenuPage> {
    match MenuTemplate::from_id(template_id) {
        Some(template) => paginate(groups, template),
        None => paginate_by_items(groups, DEFAULT_PAGE_CAPACITY),
    }
}

/// Item-count pagination shared by all non-tri-fold templates.
///
/// When content overflows, pages are rebalanced: with `total` items and
/// `pages = ceil(total / capacity)`, each page gets
/// `ceil(total / pages)` items rather than filling to capacity, so the
/// last page is never nearly empty.
fn paginate_by_items(groups: &[CategoryGroup], capacity: usize) -> Vec<MenuPage> {
    let total: usize = groups.iter().map(|g| g.items.len()).sum();

    if total <= capacity {
        return vec![MenuPage { groups: groups.to_vec() }];
    }

    let pages = total.div_ceil(capacity);
    let items_per_page = total.div_ceil(pages);

    // flatten to (category, item) preserving encounter order
    let flat: Vec<(&str, &MenuItem)> = groups
        .iter()
        .flat_map(|g| g.items.iter().map(move |i| (g.category_id.as_str(), i)))
        .collect();

    flat.chunks(items_per_page)
        .map(|chunk| {
            // regroup each chunk back into per-category runs
            let mut page_groups: Vec<CategoryGroup> = Vec::new();
            for (category_id, item) in chunk {
                match page_groups.last_mut() {
                    Some(last) if last.category_id == *category_id => {
                        last.items.push((*item).clone())
                    }
                    _ => page_groups.push(CategoryGroup::new(*category_id, vec![(*item).clone()])),
                }
            }
            MenuPage { groups: page_groups }
        })
        .collect()
}

/// Tri-fold pagination: the category list itself is cut into exactly three
/// contiguous panels by category count, item counts ignored. A panel may be
/// empty when there are fewer than three categories.
fn paginate_trifold(groups: &[CategoryGroup]) -> Vec<MenuPage> {
    let n = groups.len();
    let base = n / 3;
    let remainder = n % 3;

    let mut pages = Vec::with_capacity(3);
    let mut start = 0;
    for panel in 0..3 {
        let len = base + usize::from(panel < remainder);
        pages.push(MenuPage { groups: groups[start..start + len].to_vec() });
        start += len;
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("Item {}", id),
            price: 950,
            description: None,
            images: vec![],
            category_id: category.into(),
            is_chef_recommendation: false,
            sort_order: 0,
            is_active: true,
        }
    }

    fn group(category: &str, count: usize) -> CategoryGroup {
        CategoryGroup::new(
            category,
            (0..count)
                .map(|i| item(&format!("{}-{}", category, i), category))
                .collect(),
        )
    }

    #[test]
    fn single_page_when_under_capacity() {
        let groups = vec![group("starters", 5), group("mains", 8)];
        let pages = paginate(&groups, MenuTemplate::Classic);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].groups.len(), 2);
        assert_eq!(pages[0].item_count(), 13);
    }

    #[test]
    fn rebalanced_split_for_capacity_16_with_20_items() {
        // ceil(20 / ceil(20/16)) = ceil(20/2) = 10 items per page
        let groups = vec![group("starters", 7), group("mains", 9), group("desserts", 4)];
        let pages = paginate(&groups, MenuTemplate::Classic);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].item_count(), 10);
        assert_eq!(pages[1].item_count(), 10);

        // category regrouping is consistent with the flattened order:
        // page 1 = 7 starters + 3 mains, page 2 = 6 mains + 4 desserts
        let page1: Vec<(&str, usize)> = pages[0]
            .groups
            .iter()
            .map(|g| (g.category_id.as_str(), g.items.len()))
            .collect();
        assert_eq!(page1, vec![("starters", 7), ("mains", 3)]);

        let page2: Vec<(&str, usize)> = pages[1]
            .groups
            .iter()
            .map(|g| (g.category_id.as_str(), g.items.len()))
            .collect();
        assert_eq!(page2, vec![("mains", 6), ("desserts", 4)]);
    }

    #[test]
    fn order_preserved_across_pages() {
        let groups = vec![group("a", 12), group("b", 12)];
        let pages = paginate(&groups, MenuTemplate::Minimal); // capacity 8

        let flattened: Vec<String> = pages
            .iter()
            .flat_map(|p| p.groups.iter())
            .flat_map(|g| g.items.iter())
            .map(|i| i.id.clone())
            .collect();
        let expected: Vec<String> = groups
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn trifold_splits_categories_not_items() {
        let groups = vec![
            group("a", 30),
            group("b", 1),
            group("c", 1),
            group("d", 1),
        ];
        let pages = paginate(&groups, MenuTemplate::TriFold);

        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(|p| p.groups.len()).collect();
        assert_eq!(sizes, vec![2, 1, 1]);
        // the 30-item category is never split
        assert_eq!(pages[0].groups[0].items.len(), 30);
    }

    #[test]
    fn trifold_with_fewer_than_three_categories() {
        let pages = paginate(&[group("a", 4)], MenuTemplate::TriFold);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].groups.len(), 1);
        assert!(pages[1].groups.is_empty());
        assert!(pages[2].groups.is_empty());
    }

    #[test]
    fn unknown_template_id_uses_default_capacity() {
        // 30 items, default capacity 15: ceil(30/15)=2 pages of 15
        let groups = vec![group("a", 30)];
        let pages = paginate_by_template_id(&groups, 9);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].item_count(), 15);
        assert_eq!(pages[1].item_count(), 15);
    }
}
