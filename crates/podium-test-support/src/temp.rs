//! Catalog files on disk that clean up after themselves.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A catalog written to a uniquely named file in the temp directory.
/// The file is removed when the guard drops, including when an assertion
/// fails first.
#[derive(Debug)]
pub struct TempCatalogFile {
    path: PathBuf,
}

impl TempCatalogFile {
    /// Writes `contents` to a fresh file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn new(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "podium-catalog-{}-{}.yaml",
            std::process::id(),
            NEXT_ID.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, contents).expect("write temp catalog");
        Self { path }
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCatalogFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
