//! Dashboard computations.
//!
//! Every function here is pure and synchronous: given the cached dataset and a
//! filter selection it recomputes its output from scratch.

pub mod charts;
pub mod dashboard;
pub mod formatting;
pub mod geo;
pub mod metrics;

pub use charts::{build_chart_data, ChartData, DEFAULT_PREVIEW_ROWS};
pub use dashboard::{
    build_dashboard, build_dashboard_with_preview, build_dashboard_with_slicers, DashboardData,
};
pub use geo::{aggregate_by_state, build_map_data, enrich, share_labels, MapData};
pub use metrics::{compute_metrics_summary, summarize, AggregateMetrics, MetricsSummary};
