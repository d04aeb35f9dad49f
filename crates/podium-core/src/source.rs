//! Catalog source abstraction.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::DomainError;

/// Where the page's talk catalog is loaded from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the current catalog.
    async fn load(&self) -> Result<Catalog, DomainError>;
}
