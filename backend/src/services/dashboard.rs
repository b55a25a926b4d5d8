use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::charts::{build_chart_data, preview, ChartData, DEFAULT_PREVIEW_ROWS};
use super::geo::{build_map_data, MapData};
use super::metrics::{compute_metrics_summary, MetricsSummary};
use crate::models::{Dataset, SalesRecord};
use crate::transformations::{filter_records, FilterSelection, SlicerOptions};

/// Everything the presentation layer needs to render the page once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub selection: FilterSelection,
    pub slicers: SlicerOptions,
    pub metrics: MetricsSummary,
    pub charts: ChartData,
    pub map: MapData,
    pub preview: Vec<SalesRecord>,
    pub filtered_count: usize,
}

/// Run the full pipeline for one selection with the default preview size.
pub fn build_dashboard(dataset: &Dataset, selection: &FilterSelection) -> DashboardData {
    build_dashboard_with_preview(dataset, selection, DEFAULT_PREVIEW_ROWS)
}

/// Run the full pipeline: filter, metrics, charts, geo-join, preview.
pub fn build_dashboard_with_preview(
    dataset: &Dataset,
    selection: &FilterSelection,
    preview_rows: usize,
) -> DashboardData {
    let slicers = SlicerOptions::from_records(dataset.records());
    build_dashboard_with_slicers(dataset, slicers, selection, preview_rows)
}

/// Same as [`build_dashboard_with_preview`] with slicer options the caller
/// already derived from `dataset`.
pub fn build_dashboard_with_slicers(
    dataset: &Dataset,
    slicers: SlicerOptions,
    selection: &FilterSelection,
    preview_rows: usize,
) -> DashboardData {
    let started = Instant::now();
    let records = dataset.records();
    let filtered = filter_records(records, selection);

    let data = DashboardData {
        selection: selection.clone(),
        slicers,
        metrics: compute_metrics_summary(records, &filtered, selection),
        charts: build_chart_data(records, &filtered),
        map: build_map_data(&filtered),
        preview: preview(records, preview_rows),
        filtered_count: filtered.len(),
    };

    debug!(
        "Built dashboard for {:?}: {}/{} records in {:?}",
        selection,
        filtered.len(),
        records.len(),
        started.elapsed()
    );
    data
}
