//! Store inspection trait (port)

use async_trait::async_trait;

use crate::domain::StoreReport;
use crate::error::DomainError;

#[async_trait]
pub trait StoreInspector: Send + Sync {
    /// Enumerates non-system databases, their collections, and document
    /// counts.
    async fn report(&self) -> Result<StoreReport, DomainError>;
}
