//! Shared application state.

use std::sync::Arc;

use podium_core::clock::Clock;
use podium_core::source::CatalogSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where the talk catalog is loaded from on each request.
    pub catalog_source: Arc<dyn CatalogSource>,
    /// Clock used for the footer's copyright year.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            catalog_source,
            clock,
        }
    }
}
