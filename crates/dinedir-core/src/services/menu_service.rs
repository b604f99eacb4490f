// ============================================================================
// DineDir Core - Menu Normalizer
// File: crates/dinedir-core/src/services/menu_service.rs
// ============================================================================
//! Derives a flat, ordered menu from whichever raw source a restaurant carries

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{MenuItem, MenuSource, RawMenuCategory, RawMenuItem, Restaurant};
use crate::repositories::MenuItemRepository;

/// Normalizer output: items in emission order plus the distinct category
/// names in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct NormalizedMenu {
    pub items: Vec<MenuItem>,
    pub categories: Vec<String>,
}

pub struct MenuService {
    item_repo: Arc<dyn MenuItemRepository>,
}

impl MenuService {
    pub fn new(item_repo: Arc<dyn MenuItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Normalizes a restaurant's menu.
    ///
    /// A missing restaurant (absent or locked upstream) yields an empty menu,
    /// and so does any failure reading the raw source. The page always
    /// renders.
    pub async fn normalized_menu(&self, restaurant: Option<&Restaurant>) -> NormalizedMenu {
        let Some(restaurant) = restaurant else {
            return NormalizedMenu::default();
        };

        let items = match MenuSource::detect(restaurant) {
            MenuSource::EmbeddedCategories(categories) => {
                info!(
                    "Found {} embedded menu categories for restaurant {}",
                    categories.len(),
                    restaurant.id
                );
                from_categories(categories, &restaurant.id)
            }
            MenuSource::EmbeddedItems(raw_items) => {
                info!(
                    "Found {} menu items embedded in restaurant {}",
                    raw_items.len(),
                    restaurant.id
                );
                from_flat(raw_items, &restaurant.id)
            }
            MenuSource::ExternalCollection => {
                match self.item_repo.find_by_restaurant(&restaurant.id).await {
                    Ok(raw_items) => {
                        info!(
                            "Found {} menu items in the item collection for restaurant {}",
                            raw_items.len(),
                            restaurant.id
                        );
                        from_flat(&raw_items, &restaurant.id)
                    }
                    Err(e) => {
                        error!(
                            "Error fetching menu items for restaurant {}: {}",
                            restaurant.id, e
                        );
                        Vec::new()
                    }
                }
            }
        };

        let categories = categories_in_first_seen_order(&items);
        NormalizedMenu { items, categories }
    }
}

/// Emission order is exactly source order: category order, then item order
/// within each category. Missing item identifiers are synthesized from the
/// source position.
fn from_categories(categories: &[RawMenuCategory], restaurant_id: &str) -> Vec<MenuItem> {
    let mut items = Vec::new();
    for (category_index, category) in categories.iter().enumerate() {
        let category_name = category.display_name();
        for (item_index, raw) in category.items.iter().enumerate() {
            let mut item = MenuItem::from_raw(
                raw,
                restaurant_id,
                format!("item-{category_index}-{item_index}"),
            );
            // The enclosing category entry names the category, not the item.
            item.category = category_name.to_string();
            items.push(item);
        }
    }
    items
}

fn from_flat(raw_items: &[RawMenuItem], restaurant_id: &str) -> Vec<MenuItem> {
    raw_items
        .iter()
        .map(|raw| MenuItem::from_raw(raw, restaurant_id, String::new()))
        .collect()
}

/// Distinct category names in the order a single left-to-right scan first
/// sees them; never sorted.
fn categories_in_first_seen_order(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::menu_item_repository::MockMenuItemRepository;
    use crate::DomainError;

    fn restaurant(id: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: "Test".to_string(),
            logo: String::new(),
            cover_photo: None,
            location: String::new(),
            description: String::new(),
            theme_color: None,
            locked: None,
            menu_categories: None,
            menu_items: None,
        }
    }

    fn named_item(name: &str) -> RawMenuItem {
        RawMenuItem {
            name: Some(name.to_string()),
            ..RawMenuItem::default()
        }
    }

    fn service_with_mock(mock: MockMenuItemRepository) -> MenuService {
        MenuService::new(Arc::new(mock))
    }

    fn inert_service() -> MenuService {
        service_with_mock(MockMenuItemRepository::new())
    }

    #[tokio::test]
    async fn categories_path_preserves_source_order() {
        let mut r = restaurant("r1");
        r.menu_categories = Some(vec![
            RawMenuCategory {
                name: Some("Starters".to_string()),
                items: vec![named_item("Sambusa"), named_item("Azifa")],
            },
            RawMenuCategory {
                name: Some("Mains".to_string()),
                items: vec![named_item("Doro Wot")],
            },
        ]);

        let menu = inert_service().normalized_menu(Some(&r)).await;

        let names: Vec<&str> = menu.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Sambusa", "Azifa", "Doro Wot"]);
        assert_eq!(menu.categories, vec!["Starters", "Mains"]);
        assert_eq!(menu.items[0].id, "item-0-0");
        assert_eq!(menu.items[1].id, "item-0-1");
        assert_eq!(menu.items[2].id, "item-1-0");
        assert!(menu.items.iter().all(|i| i.restaurant_id == "r1"));
    }

    #[tokio::test]
    async fn category_entry_name_overrides_item_category() {
        let mut r = restaurant("r1");
        r.menu_categories = Some(vec![RawMenuCategory {
            name: Some("Drinks".to_string()),
            items: vec![RawMenuItem {
                category: Some("Ignored".to_string()),
                ..named_item("Tej")
            }],
        }]);

        let menu = inert_service().normalized_menu(Some(&r)).await;
        assert_eq!(menu.items[0].category, "Drinks");
    }

    #[tokio::test]
    async fn unnamed_category_defaults() {
        let mut r = restaurant("r1");
        r.menu_categories = Some(vec![RawMenuCategory {
            name: None,
            items: vec![named_item("Kitfo")],
        }]);

        let menu = inert_service().normalized_menu(Some(&r)).await;
        assert_eq!(menu.categories, vec!["Uncategorized"]);
    }

    #[tokio::test]
    async fn embedded_items_attach_restaurant_id_in_order() {
        let mut r = restaurant("r2");
        r.menu_items = Some(vec![named_item("Shiro"), named_item("Tibs")]);

        let menu = inert_service().normalized_menu(Some(&r)).await;

        let names: Vec<&str> = menu.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shiro", "Tibs"]);
        assert!(menu.items.iter().all(|i| i.restaurant_id == "r2"));
    }

    #[tokio::test]
    async fn external_collection_queried_exactly_once() {
        let mut mock = MockMenuItemRepository::new();
        mock.expect_find_by_restaurant()
            .withf(|id| id == "r3")
            .times(1)
            .returning(|_| {
                Ok(vec![RawMenuItem {
                    id: Some("stored".to_string()),
                    ..RawMenuItem::default()
                }])
            });

        let menu = service_with_mock(mock)
            .normalized_menu(Some(&restaurant("r3")))
            .await;

        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].id, "stored");
        assert_eq!(menu.items[0].name, "Unnamed Item");
        assert_eq!(menu.categories, vec!["Uncategorized"]);
    }

    #[tokio::test]
    async fn empty_embedded_sources_fall_through_to_collection() {
        let mut r = restaurant("r4");
        r.menu_categories = Some(Vec::new());
        r.menu_items = Some(Vec::new());

        let mut mock = MockMenuItemRepository::new();
        mock.expect_find_by_restaurant()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let menu = service_with_mock(mock).normalized_menu(Some(&r)).await;
        assert!(menu.items.is_empty());
        assert!(menu.categories.is_empty());
    }

    #[tokio::test]
    async fn missing_restaurant_yields_empty_menu() {
        let menu = inert_service().normalized_menu(None).await;
        assert!(menu.items.is_empty());
        assert!(menu.categories.is_empty());
    }

    #[tokio::test]
    async fn repository_failure_degrades_to_empty() {
        let mut mock = MockMenuItemRepository::new();
        mock.expect_find_by_restaurant()
            .returning(|_| Err(DomainError::DatabaseError("store unavailable".to_string())));

        let menu = service_with_mock(mock)
            .normalized_menu(Some(&restaurant("r5")))
            .await;
        assert!(menu.items.is_empty());
        assert!(menu.categories.is_empty());
    }

    #[tokio::test]
    async fn category_order_is_first_seen_not_sorted() {
        let mut r = restaurant("r6");
        r.menu_items = Some(vec![
            RawMenuItem {
                category: Some("Zesty".to_string()),
                ..named_item("A")
            },
            RawMenuItem {
                category: Some("Apps".to_string()),
                ..named_item("B")
            },
            RawMenuItem {
                category: Some("Zesty".to_string()),
                ..named_item("C")
            },
        ]);

        let menu = inert_service().normalized_menu(Some(&r)).await;
        assert_eq!(menu.categories, vec!["Zesty", "Apps"]);
    }
}
