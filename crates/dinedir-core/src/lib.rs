//! # DineDir Core
//!
//! Domain entities, the menu normalizer, repository ports, and the category
//! scroll-sync controller for the restaurant directory.

pub mod browse;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
