//! MongoDB repository implementations

pub mod menu_item_repo_impl;
pub mod restaurant_repo_impl;

pub use menu_item_repo_impl::MongoMenuItemRepository;
pub use restaurant_repo_impl::MongoRestaurantRepository;
