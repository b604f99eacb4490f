//! Repository traits (ports)

pub mod menu_item_repository;
pub mod restaurant_repository;
pub mod store_inspector;

pub use menu_item_repository::MenuItemRepository;
pub use restaurant_repository::RestaurantRepository;
pub use store_inspector::StoreInspector;
