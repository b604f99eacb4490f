//! Restaurant domain entity

use serde::{Deserialize, Serialize};

use super::menu_source::{RawMenuCategory, RawMenuItem};

/// A restaurant record as stored in the directory.
///
/// At most one of the embedded menu representations is honored per
/// restaurant; see [`MenuSource`](super::MenuSource) for the selection rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub cover_photo: Option<String>,
    pub location: String,
    pub description: String,
    pub theme_color: Option<String>,
    pub locked: Option<bool>,
    pub menu_categories: Option<Vec<RawMenuCategory>>,
    pub menu_items: Option<Vec<RawMenuItem>>,
}

impl Restaurant {
    /// Browsable only while the lock flag is absent or false.
    pub fn is_visible(&self) -> bool {
        !self.locked.unwrap_or(false)
    }
}
