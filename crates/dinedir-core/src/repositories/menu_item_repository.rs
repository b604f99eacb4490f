//! Menu item repository trait (port)
//!
//! Consulted only when a restaurant embeds neither menu representation.

use async_trait::async_trait;

use crate::domain::RawMenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Raw item records persisted for a restaurant, in store return order.
    async fn find_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<RawMenuItem>, DomainError>;
}
