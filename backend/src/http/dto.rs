//! Data Transfer Objects for the HTTP API.
//!
//! Dashboard payloads are the service types themselves (they already derive
//! Serialize/Deserialize); this module only adds request queries and the
//! endpoint-specific envelopes.

use serde::{Deserialize, Serialize};

use crate::transformations::FilterSelection;

/// Slicer query parameters shared by the filtered endpoints.
///
/// Absent, empty or `"All"` values are the wildcard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionQuery {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl SelectionQuery {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection::from_query(
            self.retailer.as_deref(),
            self.month.as_deref(),
            self.state.as_deref(),
        )
    }
}

/// Query parameters for the preview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewQuery {
    /// Number of rows (default: configured preview size)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for the full dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Number of preview rows (default: configured preview size)
    #[serde(default)]
    pub preview_rows: Option<usize>,
}

impl DashboardQuery {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection::from_query(
            self.retailer.as_deref(),
            self.month.as_deref(),
            self.state.as_deref(),
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of records in the cached dataset
    pub records: usize,
}

/// Dataset metadata response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfoResponse {
    pub path: Option<String>,
    pub rows: usize,
    pub checksum: String,
    pub columns: Vec<String>,
}

/// Preview rows response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub rows: Vec<crate::models::SalesRecord>,
    pub total: usize,
}
