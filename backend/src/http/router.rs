//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is read-only, so any origin may read it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/dataset", get(handlers::get_dataset_info))
        .route("/slicers", get(handlers::get_slicers))
        .route("/preview", get(handlers::get_preview))
        .route("/metrics/review", get(handlers::get_review_metrics))
        .route("/metrics", get(handlers::get_metrics))
        .route("/charts", get(handlers::get_charts))
        .route("/map", get(handlers::get_map))
        .route("/dashboard", get(handlers::get_dashboard));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
