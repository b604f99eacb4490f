//! Normalized menu item

use serde::{Deserialize, Serialize};

use super::menu_source::RawMenuItem;

/// Label applied to items whose source carries no usable name.
pub const DEFAULT_ITEM_NAME: &str = "Unnamed Item";

/// Category applied to items whose source carries no usable category.
pub const DEFAULT_CATEGORY_NAME: &str = "Uncategorized";

/// A menu item with all defaulting rules applied, independent of which raw
/// source produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl MenuItem {
    /// Applies the defaulting rules to a raw item. Empty strings count as
    /// missing, and the image is never substituted with a placeholder.
    pub fn from_raw(raw: &RawMenuItem, restaurant_id: &str, fallback_id: String) -> Self {
        Self {
            id: non_empty(raw.id.as_deref())
                .map(str::to_string)
                .unwrap_or(fallback_id),
            restaurant_id: restaurant_id.to_string(),
            name: non_empty(raw.name.as_deref())
                .unwrap_or(DEFAULT_ITEM_NAME)
                .to_string(),
            description: raw.description.clone().unwrap_or_default(),
            price: raw.price.unwrap_or(0.0),
            image: raw.image.clone().unwrap_or_default(),
            category: non_empty(raw.category.as_deref())
                .unwrap_or(DEFAULT_CATEGORY_NAME)
                .to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let item = MenuItem::from_raw(&RawMenuItem::default(), "r1", "item-0-0".to_string());
        assert_eq!(item.id, "item-0-0");
        assert_eq!(item.restaurant_id, "r1");
        assert_eq!(item.name, DEFAULT_ITEM_NAME);
        assert_eq!(item.description, "");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.image, "");
        assert_eq!(item.category, DEFAULT_CATEGORY_NAME);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let raw = RawMenuItem {
            id: Some(String::new()),
            name: Some(String::new()),
            category: Some(String::new()),
            ..RawMenuItem::default()
        };
        let item = MenuItem::from_raw(&raw, "r1", "item-2-3".to_string());
        assert_eq!(item.id, "item-2-3");
        assert_eq!(item.name, DEFAULT_ITEM_NAME);
        assert_eq!(item.category, DEFAULT_CATEGORY_NAME);
    }

    #[test]
    fn populated_fields_pass_through() {
        let raw = RawMenuItem {
            id: Some("abc".to_string()),
            name: Some("Doro Wot".to_string()),
            description: Some("Slow-cooked chicken stew".to_string()),
            price: Some(240.0),
            image: Some("/img/doro.jpg".to_string()),
            category: Some("Mains".to_string()),
        };
        let item = MenuItem::from_raw(&raw, "r1", String::new());
        assert_eq!(item.id, "abc");
        assert_eq!(item.name, "Doro Wot");
        assert_eq!(item.price, 240.0);
        assert_eq!(item.category, "Mains");
    }
}
