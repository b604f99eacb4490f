//! Domain entities for the restaurant directory.

pub mod menu_item;
pub mod menu_source;
pub mod restaurant;
pub mod store_report;

// Re-export all entities
pub use menu_item::MenuItem;
pub use menu_source::{MenuSource, RawMenuCategory, RawMenuItem};
pub use restaurant::Restaurant;
pub use store_report::{CollectionSummary, DatabaseSummary, StoreReport};
