//! Raw menu sources and their selection rules

use serde::{Deserialize, Serialize};

use super::menu_item::DEFAULT_CATEGORY_NAME;
use super::restaurant::Restaurant;

/// One loosely-typed category entry from an embedded `menuCategories` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMenuCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<RawMenuItem>,
}

impl RawMenuCategory {
    /// The category label after defaulting; empty counts as missing.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CATEGORY_NAME,
        }
    }
}

/// A raw item object before the defaulting rules are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMenuItem {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Which raw representation feeds a restaurant's menu.
///
/// Exactly one source is chosen per restaurant, in this priority order;
/// sources are never merged. An empty sequence counts as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuSource<'a> {
    EmbeddedCategories(&'a [RawMenuCategory]),
    EmbeddedItems(&'a [RawMenuItem]),
    ExternalCollection,
}

impl<'a> MenuSource<'a> {
    pub fn detect(restaurant: &'a Restaurant) -> Self {
        if let Some(categories) = restaurant.menu_categories.as_deref() {
            if !categories.is_empty() {
                return Self::EmbeddedCategories(categories);
            }
        }
        if let Some(items) = restaurant.menu_items.as_deref() {
            if !items.is_empty() {
                return Self::EmbeddedItems(items);
            }
        }
        Self::ExternalCollection
    }
}
