//! Test catalog sources — mock `CatalogSource` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use podium_core::catalog::Catalog;
use podium_core::error::DomainError;
use podium_core::source::CatalogSource;

/// A catalog source that returns a clone of the same catalog on every load
/// and counts how often it was asked.
#[derive(Debug)]
pub struct FixedCatalogSource {
    catalog: Catalog,
    loads: AtomicUsize,
}

impl FixedCatalogSource {
    /// Create a source that always serves `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of `load` calls so far.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FixedCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }
}

/// A catalog source that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }
}
