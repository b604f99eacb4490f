//! Restaurant repository trait (port)

use async_trait::async_trait;

use crate::domain::Restaurant;
use crate::error::DomainError;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Unlocked restaurants, most recently updated first.
    async fn list_unlocked(&self) -> Result<Vec<Restaurant>, DomainError>;

    /// A restaurant by id, only while its lock flag is absent or false.
    async fn find_unlocked_by_id(&self, id: &str) -> Result<Option<Restaurant>, DomainError>;
}
