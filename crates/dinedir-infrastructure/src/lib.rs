//! # DineDir Infrastructure
//!
//! MongoDB implementations of the core repository ports (adapters).

pub mod database;

pub use database::{
    create_client, MongoMenuItemRepository, MongoRestaurantRepository, MongoStoreInspector,
};
