//! Load-once cache for the dataset.
//!
//! Lifecycle: a [`DatasetCache`] is created empty with the path it will read,
//! populated on the first successful [`DatasetCache::get_or_load`], never
//! invalidated afterwards, and dropped at process exit. A failed load leaves
//! the cache empty so the error is reported again on the next access.
//!
//! The server creates one cache at startup and shares it through the HTTP
//! state, which makes it the process-wide dataset.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use super::error::{LoadError, LoadResult};
use super::loaders::DatasetLoader;
use crate::models::Dataset;

/// Lazily-populated, write-once holder of the loaded dataset.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Create a cache that already holds `dataset`.
    pub fn with_dataset(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        let cache = Self::new(path);
        let _ = cache.cell.set(Arc::new(dataset));
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached dataset, reading the file on first access.
    pub fn get_or_load(&self) -> LoadResult<Arc<Dataset>> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(DatasetLoader::load(&self.path)?);
        // First value to land wins; all callers share it.
        let _ = self.cell.set(dataset);
        self.cell
            .get()
            .cloned()
            .ok_or_else(|| LoadError::Io {
                path: self.path.clone(),
                source: std::io::Error::other("dataset cache was not populated"),
            })
    }
}
