use log::{debug, info};
use std::path::Path;
use std::time::Instant;

use super::checksum::calculate_checksum;
use super::csv_parser;
use super::error::{LoadError, LoadResult};
use crate::models::{Dataset, DatasetSource};

/// Reads the sales CSV into an immutable [`Dataset`].
///
/// The loader never writes to the source file. Use
/// [`DatasetCache`](super::DatasetCache) to load at most once per process.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset from a CSV file on disk.
    pub fn load(path: &Path) -> LoadResult<Dataset> {
        let started = Instant::now();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let dataset = Self::load_from_bytes(bytes, Some(path))?;
        info!(
            "Loaded {} sales records from {} in {:?}",
            dataset.len(),
            path.display(),
            started.elapsed()
        );
        Ok(dataset)
    }

    /// Load the dataset from CSV bytes already in memory.
    pub fn load_from_bytes(bytes: Vec<u8>, path: Option<&Path>) -> LoadResult<Dataset> {
        let checksum = calculate_checksum(&bytes);
        let df = csv_parser::parse_sales_csv_bytes(bytes)?;
        let records = csv_parser::dataframe_to_records(&df)?;
        let columns = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        Ok(Dataset::new(
            records,
            DatasetSource {
                path: path.map(Path::to_path_buf),
                checksum,
                columns,
            },
        ))
    }

    /// Load the dataset from a CSV string.
    pub fn load_from_str(csv: &str) -> LoadResult<Dataset> {
        Self::load_from_bytes(csv.as_bytes().to_vec(), None)
    }
}
