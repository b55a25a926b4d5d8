//! Application state for the HTTP server.

use std::sync::Arc;

use super::error::AppError;
use crate::io::DatasetCache;
use crate::models::Dataset;
use crate::services::DEFAULT_PREVIEW_ROWS;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Load-once dataset cache
    pub cache: Arc<DatasetCache>,
    /// Default number of rows in the dataset preview
    pub preview_rows: usize,
}

impl AppState {
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self {
            cache,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    /// The cached dataset, loading it if this is the first access.
    pub fn dataset(&self) -> Result<Arc<Dataset>, AppError> {
        Ok(self.cache.get_or_load()?)
    }
}
