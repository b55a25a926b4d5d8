//! Errors raised while loading the dataset.

use std::path::PathBuf;

use crate::models::DatasetColumn;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// The dataset could not be loaded. Always fatal: no partial dashboard is
/// built from a dataset that failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV could not be parsed or its columns could not be cast.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] polars::prelude::PolarsError),

    /// A required header is absent.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(DatasetColumn),

    /// A required cell is empty or has the wrong type.
    #[error("Invalid value in column '{column}' at row {row}")]
    InvalidValue { row: usize, column: DatasetColumn },

    /// `Total Sales` must be a finite, non-negative number.
    #[error("Negative or non-finite total sales {value} at row {row}")]
    InvalidSales { row: usize, value: f64 },
}
