//! Public API surface of the backend.
//!
//! This file consolidates the types a frontend or embedding program needs.
//! All payload types derive Serialize/Deserialize for JSON serialization.

pub use crate::io::{DatasetCache, DatasetLoader, LoadError, LoadResult};
pub use crate::models::{Dataset, DatasetColumn, DatasetSource, SalesRecord};
pub use crate::reference::Coordinates;
pub use crate::services::charts::{CategoryCount, CategoryRevenue, ChartData, MonthlyRevenue};
pub use crate::services::dashboard::DashboardData;
pub use crate::services::geo::{EnrichedRecord, MapData, MapMarker, ShareSlice, StateRevenue};
pub use crate::services::metrics::{AggregateMetrics, MetricsSummary, SelectedValues};
pub use crate::transformations::{FilterSelection, InvalidSlicerValue, Slicer, SlicerOptions};
