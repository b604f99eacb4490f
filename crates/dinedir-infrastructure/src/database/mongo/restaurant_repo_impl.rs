// ============================================================================
// DineDir Infrastructure - MongoDB Restaurant Repository
// File: crates/dinedir-infrastructure/src/database/mongo/restaurant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::Deserialize;
use tracing::{error, warn};

use dinedir_core::domain::{RawMenuCategory, RawMenuItem, Restaurant};
use dinedir_core::error::DomainError;
use dinedir_core::repositories::RestaurantRepository;

use crate::database::RESTAURANTS_COLLECTION;

pub struct MongoRestaurantRepository {
    collection: Collection<RestaurantRow>,
}

impl MongoRestaurantRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RESTAURANTS_COLLECTION),
        }
    }
}

// Internal row type for BSON mapping
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestaurantRow {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    logo: String,
    #[serde(default)]
    cover_photo: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theme_color: Option<String>,
    #[serde(default)]
    locked: Option<bool>,
    #[serde(default)]
    menu_categories: Option<Vec<RawMenuCategory>>,
    #[serde(default)]
    menu_items: Option<Vec<RawMenuItem>>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: row.id.to_hex(),
            name: row.name,
            logo: row.logo,
            cover_photo: row.cover_photo,
            location: row.location,
            description: row.description,
            theme_color: row.theme_color,
            locked: row.locked,
            menu_categories: row.menu_categories,
            menu_items: row.menu_items,
        }
    }
}

/// Matches documents whose lock flag is absent or false. The exclusion lives
/// in the query itself so a locked restaurant never leaves the store.
fn unlocked_filter() -> Document {
    doc! {
        "$or": [
            { "locked": { "$exists": false } },
            { "locked": false },
        ]
    }
}

#[async_trait]
impl RestaurantRepository for MongoRestaurantRepository {
    async fn list_unlocked(&self) -> Result<Vec<Restaurant>, DomainError> {
        let cursor = self
            .collection
            .find(unlocked_filter())
            .sort(doc! { "updatedAt": -1 })
            .await
            .map_err(|e| {
                error!("Database error listing restaurants: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let rows: Vec<RestaurantRow> = cursor.try_collect().await.map_err(|e| {
            error!("Database error reading restaurant cursor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn find_unlocked_by_id(&self, id: &str) -> Result<Option<Restaurant>, DomainError> {
        let object_id = ObjectId::parse_str(id).map_err(|e| {
            warn!("Malformed restaurant id {:?}: {}", id, e);
            DomainError::InvalidRestaurantId(id.to_string())
        })?;

        let mut filter = unlocked_filter();
        filter.insert("_id", object_id);

        let row = self.collection.find_one(filter).await.map_err(|e| {
            error!("Database error finding restaurant by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Restaurant::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_filter_accepts_absent_or_false() {
        let filter = unlocked_filter();
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0].as_document().unwrap(),
            &doc! { "locked": { "$exists": false } }
        );
        assert_eq!(clauses[1].as_document().unwrap(), &doc! { "locked": false });
    }

    #[test]
    fn row_converts_object_id_to_hex() {
        let row = RestaurantRow {
            id: ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            name: "Addis House".to_string(),
            logo: String::new(),
            cover_photo: None,
            location: "Bole".to_string(),
            description: String::new(),
            theme_color: None,
            locked: None,
            menu_categories: None,
            menu_items: None,
        };
        let restaurant = Restaurant::from(row);
        assert_eq!(restaurant.id, "507f1f77bcf86cd799439011");
        assert!(restaurant.is_visible());
    }
}
