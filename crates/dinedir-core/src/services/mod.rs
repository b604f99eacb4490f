//! Domain services

pub mod menu_service;

pub use menu_service::{MenuService, NormalizedMenu};
