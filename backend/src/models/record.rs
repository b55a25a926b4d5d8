//! Sales records and the immutable in-memory dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// One sales transaction as read from the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub retailer: String,
    pub month: String,
    pub state: String,
    pub region: String,
    pub product: String,
    pub total_sales: f64,
}

impl SalesRecord {
    /// Value of a categorical column for this record.
    pub fn value(&self, column: DatasetColumn) -> Option<&str> {
        match column {
            DatasetColumn::Retailer => Some(&self.retailer),
            DatasetColumn::Month => Some(&self.month),
            DatasetColumn::State => Some(&self.state),
            DatasetColumn::Region => Some(&self.region),
            DatasetColumn::Product => Some(&self.product),
            DatasetColumn::TotalSales => None,
        }
    }
}

/// Columns the loader requires in the source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetColumn {
    Retailer,
    Month,
    State,
    Region,
    Product,
    TotalSales,
}

impl DatasetColumn {
    pub const REQUIRED: [DatasetColumn; 6] = [
        DatasetColumn::Retailer,
        DatasetColumn::Month,
        DatasetColumn::State,
        DatasetColumn::Region,
        DatasetColumn::Product,
        DatasetColumn::TotalSales,
    ];

    /// Header name as it appears in the CSV file.
    pub fn header(self) -> &'static str {
        match self {
            DatasetColumn::Retailer => "Retailer",
            DatasetColumn::Month => "Month",
            DatasetColumn::State => "State",
            DatasetColumn::Region => "Region",
            DatasetColumn::Product => "Product",
            DatasetColumn::TotalSales => "Total Sales",
        }
    }
}

impl fmt::Display for DatasetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Where a dataset came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    /// Path of the file the records were read from, if any.
    pub path: Option<PathBuf>,
    /// SHA-256 of the raw file contents, hex encoded.
    pub checksum: String,
    /// Header names as they appear in the file, extra columns included.
    pub columns: Vec<String>,
}

/// Ordered, immutable collection of sales records.
///
/// Cloning is cheap: the records live behind an `Arc` and are never mutated
/// after loading.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[SalesRecord]>,
    source: DatasetSource,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>, source: DatasetSource) -> Self {
        Self {
            records: records.into(),
            source,
        }
    }

    /// Build a dataset that was not read from a file (tests, fixtures).
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self::new(
            records,
            DatasetSource {
                path: None,
                checksum: String::new(),
                columns: DatasetColumn::REQUIRED
                    .iter()
                    .map(|c| c.header().to_string())
                    .collect(),
            },
        )
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, total_sales: f64) -> SalesRecord {
        SalesRecord {
            retailer: "Foot Locker".to_string(),
            month: "January".to_string(),
            state: state.to_string(),
            region: "South".to_string(),
            product: "Men's Street Footwear".to_string(),
            total_sales,
        }
    }

    #[test]
    fn test_record_value_by_column() {
        let r = record("Texas", 10.0);
        assert_eq!(r.value(DatasetColumn::State), Some("Texas"));
        assert_eq!(r.value(DatasetColumn::Retailer), Some("Foot Locker"));
        assert_eq!(r.value(DatasetColumn::TotalSales), None);
    }

    #[test]
    fn test_column_headers() {
        assert_eq!(DatasetColumn::TotalSales.header(), "Total Sales");
        assert_eq!(DatasetColumn::Month.to_string(), "Month");
        assert_eq!(DatasetColumn::REQUIRED.len(), 6);
    }

    #[test]
    fn test_dataset_clone_shares_records() {
        let ds = Dataset::from_records(vec![record("Texas", 1.0), record("Maine", 2.0)]);
        let cloned = ds.clone();
        assert_eq!(cloned.len(), 2);
        assert!(std::ptr::eq(ds.records().as_ptr(), cloned.records().as_ptr()));
        assert!(cloned.source().path.is_none());
    }
}
