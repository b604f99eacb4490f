// ============================================================================
// DineDir Infrastructure - MongoDB Menu Item Repository
// File: crates/dinedir-infrastructure/src/database/mongo/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::Deserialize;
use tracing::error;

use dinedir_core::domain::RawMenuItem;
use dinedir_core::error::DomainError;
use dinedir_core::repositories::MenuItemRepository;

use crate::database::MENU_ITEMS_COLLECTION;

pub struct MongoMenuItemRepository {
    collection: Collection<MenuItemRow>,
}

impl MongoMenuItemRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(MENU_ITEMS_COLLECTION),
        }
    }
}

// Internal row type for BSON mapping. Defaulting happens in the normalizer,
// so fields stay optional here.
#[derive(Debug, Deserialize)]
struct MenuItemRow {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<MenuItemRow> for RawMenuItem {
    fn from(row: MenuItemRow) -> Self {
        RawMenuItem {
            id: Some(row.id.to_hex()),
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category: row.category,
        }
    }
}

#[async_trait]
impl MenuItemRepository for MongoMenuItemRepository {
    async fn find_by_restaurant(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<RawMenuItem>, DomainError> {
        let cursor = self
            .collection
            .find(doc! { "restaurantId": restaurant_id })
            .await
            .map_err(|e| {
                error!("Database error finding menu items: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let rows: Vec<MenuItemRow> = cursor.try_collect().await.map_err(|e| {
            error!("Database error reading menu item cursor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(RawMenuItem::from).collect())
    }
}
