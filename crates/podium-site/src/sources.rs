//! Catalog sources backed by the embedded catalog or a file on disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use podium_core::catalog::Catalog;
use podium_core::error::DomainError;
use podium_core::source::CatalogSource;
use tracing::{debug, warn};

/// The catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("../content/speaking.yaml");

/// Serves the catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        Catalog::from_yaml(BUILTIN_CATALOG)
    }
}

/// Reads a YAML catalog from disk on every load, so edits show up without a
/// restart.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        debug!(path = %self.path.display(), "loading catalog");

        let source = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "catalog read failed");
                if e.kind() == ErrorKind::NotFound {
                    DomainError::NotFound(format!("catalog {}", self.path.display()))
                } else {
                    DomainError::Infrastructure(format!(
                        "failed to read catalog {}: {e}",
                        self.path.display()
                    ))
                }
            })?;

        Catalog::from_yaml(&source)
    }
}
