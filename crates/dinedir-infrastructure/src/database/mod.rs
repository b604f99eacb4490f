//! Database module (MongoDB adapters)

pub mod connection;
pub mod inspector;
pub mod mongo;

pub use connection::create_client;
pub use inspector::MongoStoreInspector;
pub use mongo::{MongoMenuItemRepository, MongoRestaurantRepository};

/// Collection holding restaurant documents.
pub const RESTAURANTS_COLLECTION: &str = "restaurants";

/// Collection holding externally persisted menu items.
pub const MENU_ITEMS_COLLECTION: &str = "menuItems";
