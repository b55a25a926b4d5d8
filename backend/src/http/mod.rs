//! HTTP server module for the sales dashboard.
//!
//! Exposes the dashboard pipeline as a JSON REST API for the frontend that
//! renders the slicers, charts and map.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and slicer validation                    │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Filtering, metrics, charts, geo-join                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset cache (io/)                                      │
//! │  - CSV loaded once per process                            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG`-style directives such as `sales_dash=debug,info`.
/// Missing or unparsable directives fall back to `info`.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
