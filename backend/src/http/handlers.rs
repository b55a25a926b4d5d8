//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Filtered endpoints validate the slicer values against the options
//! derived from the dataset before running the pipeline.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    DashboardQuery, DatasetInfoResponse, HealthResponse, PreviewQuery, PreviewResponse,
    SelectionQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Dataset, SalesRecord};
use crate::services::{self, charts, AggregateMetrics, ChartData, DashboardData, MapData, MetricsSummary};
use crate::transformations::{filter_records, FilterSelection, SlicerOptions};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run CPU-bound pipeline work off the async executor.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

/// Reject slicer values the dashboard would never offer.
fn validate_selection(
    options: &SlicerOptions,
    selection: FilterSelection,
) -> Result<FilterSelection, AppError> {
    let invalid = selection.invalid_values(options);
    if invalid.is_empty() {
        return Ok(selection);
    }

    let message = invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    tracing::debug!("Rejected selection: {}", message);
    Err(AppError::BadRequest(message))
}

/// Validate `selection` and filter the dataset with it. Sorts the whole
/// dataset to derive the options, so call it inside [`run_blocking`].
fn filter_checked(
    dataset: &Dataset,
    selection: FilterSelection,
) -> Result<(FilterSelection, Vec<SalesRecord>), AppError> {
    let options = SlicerOptions::from_records(dataset.records());
    let selection = validate_selection(&options, selection)?;
    let filtered = filter_records(dataset.records(), &selection);
    Ok((selection, filtered))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint; fails with 503 if the dataset is unavailable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dataset = state.dataset()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: dataset.len(),
    }))
}

// =============================================================================
// Dataset
// =============================================================================

/// GET /v1/dataset
pub async fn get_dataset_info(State(state): State<AppState>) -> HandlerResult<DatasetInfoResponse> {
    let dataset = state.dataset()?;
    let source = dataset.source();

    Ok(Json(DatasetInfoResponse {
        path: source.path.as_ref().map(|p| p.display().to_string()),
        rows: dataset.len(),
        checksum: source.checksum.clone(),
        columns: source.columns.clone(),
    }))
}

/// GET /v1/slicers
///
/// Option lists for the retailer, month and state slicers.
pub async fn get_slicers(State(state): State<AppState>) -> HandlerResult<SlicerOptions> {
    let dataset = state.dataset()?;
    let options = run_blocking(move || SlicerOptions::from_records(dataset.records())).await?;
    Ok(Json(options))
}

/// GET /v1/preview?limit=
///
/// First rows of the unfiltered dataset.
pub async fn get_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> HandlerResult<PreviewResponse> {
    let dataset = state.dataset()?;
    let limit = query.limit.unwrap_or(state.preview_rows);

    Ok(Json(PreviewResponse {
        rows: charts::preview(dataset.records(), limit),
        total: dataset.len(),
    }))
}

// =============================================================================
// Metrics
// =============================================================================

/// GET /v1/metrics/review
///
/// Metrics over the whole dataset; not affected by the slicers.
pub async fn get_review_metrics(State(state): State<AppState>) -> HandlerResult<AggregateMetrics> {
    let dataset = state.dataset()?;
    let metrics = run_blocking(move || services::summarize(dataset.records())).await?;
    Ok(Json(metrics))
}

/// GET /v1/metrics?retailer=&month=&state=
pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<MetricsSummary> {
    let dataset = state.dataset()?;
    let selection = query.to_selection();

    let summary = run_blocking(move || {
        let (selection, filtered) = filter_checked(&dataset, selection)?;
        Ok::<_, AppError>(services::compute_metrics_summary(
            dataset.records(),
            &filtered,
            &selection,
        ))
    })
    .await??;

    Ok(Json(summary))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/charts?retailer=&month=&state=
pub async fn get_charts(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<ChartData> {
    let dataset = state.dataset()?;
    let selection = query.to_selection();

    let data = run_blocking(move || {
        let (_, filtered) = filter_checked(&dataset, selection)?;
        Ok::<_, AppError>(services::build_chart_data(dataset.records(), &filtered))
    })
    .await??;

    Ok(Json(data))
}

/// GET /v1/map?retailer=&month=&state=
///
/// Revenue per state and label markers for the filtered subset.
pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<MapData> {
    let dataset = state.dataset()?;
    let selection = query.to_selection();

    let data = run_blocking(move || {
        let (_, filtered) = filter_checked(&dataset, selection)?;
        Ok::<_, AppError>(services::build_map_data(&filtered))
    })
    .await??;

    Ok(Json(data))
}

/// GET /v1/dashboard?retailer=&month=&state=&preview_rows=
///
/// The whole page in one response.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardData> {
    let dataset = state.dataset()?;
    let selection = query.to_selection();
    let preview_rows = query.preview_rows.unwrap_or(state.preview_rows);

    let data = run_blocking(move || {
        let slicers = SlicerOptions::from_records(dataset.records());
        let selection = validate_selection(&slicers, selection)?;
        Ok::<_, AppError>(services::build_dashboard_with_slicers(
            &dataset,
            slicers,
            &selection,
            preview_rows,
        ))
    })
    .await??;

    Ok(Json(data))
}
