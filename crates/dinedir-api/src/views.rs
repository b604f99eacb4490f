//! View models handed to the page templates

use serde::Serialize;

use dinedir_core::domain::{MenuItem, Restaurant};
use dinedir_core::services::NormalizedMenu;
use dinedir_shared::color;
use dinedir_shared::constants::DEFAULT_THEME_COLOR;

/// Opacity of the lighter accent used for borders and separators.
const ACCENT_OPACITY: f64 = 0.15;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub location: String,
    pub description: String,
}

pub fn restaurant_cards(restaurants: &[Restaurant]) -> Vec<RestaurantCard> {
    restaurants
        .iter()
        .map(|r| RestaurantCard {
            id: r.id.clone(),
            name: r.name.clone(),
            logo: r.logo.clone(),
            location: r.location.clone(),
            description: r.description.clone(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPage {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub cover_photo: Option<String>,
    pub location: String,
    pub description: String,
    pub theme_color: String,
    pub lighter_theme_color: String,
    pub darker_theme_color: String,
    pub categories: Vec<CategoryTab>,
    pub sections: Vec<CategorySection>,
    pub has_menu: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryTab {
    pub name: String,
    pub anchor: String,
}

#[derive(Debug, Serialize)]
pub struct CategorySection {
    pub name: String,
    pub anchor: String,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
        }
    }
}

/// Assembles the detail-page view: theme accents derived from the base color
/// and the normalized menu grouped by category in display order.
pub fn restaurant_page(restaurant: &Restaurant, menu: &NormalizedMenu) -> RestaurantPage {
    let theme_color = restaurant
        .theme_color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string());

    let categories = menu
        .categories
        .iter()
        .map(|name| CategoryTab {
            name: name.clone(),
            anchor: anchor_for(name),
        })
        .collect();

    let sections: Vec<CategorySection> = menu
        .categories
        .iter()
        .map(|name| CategorySection {
            name: name.clone(),
            anchor: anchor_for(name),
            items: menu
                .items
                .iter()
                .filter(|item| &item.category == name)
                .map(MenuItemView::from)
                .collect(),
        })
        .collect();

    RestaurantPage {
        id: restaurant.id.clone(),
        name: restaurant.name.clone(),
        logo: restaurant.logo.clone(),
        cover_photo: restaurant.cover_photo.clone(),
        location: restaurant.location.clone(),
        description: restaurant.description.clone(),
        lighter_theme_color: color::lighten(&theme_color, ACCENT_OPACITY),
        darker_theme_color: color::darken(&theme_color),
        theme_color,
        categories,
        has_menu: !sections.is_empty(),
        sections,
    }
}

/// Section anchor usable as an HTML id, derived from the category name.
fn anchor_for(category: &str) -> String {
    let slug: String = category
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("category-{slug}")
}
