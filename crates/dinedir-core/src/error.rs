//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid restaurant id: {0}")]
    InvalidRestaurantId(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
