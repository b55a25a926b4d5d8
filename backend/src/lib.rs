//! # Sales Dashboard Backend
//!
//! Filtering and aggregation engine behind a single-page sales dashboard.
//!
//! The crate loads a static CSV of sales transactions once per process, filters
//! it through three slicers (retailer, month, state), and computes the metrics,
//! chart series and per-state revenue map the frontend renders. An Axum REST
//! API serves the results as JSON.
//!
//! ## Architecture
//!
//! - [`io`]: CSV loading (polars) and the load-once dataset cache
//! - [`models`]: sales records and the immutable dataset
//! - [`transformations`]: slicer values, option lists and record filtering
//! - [`services`]: metrics, chart series, geo-join and the dashboard pipeline
//! - [`reference`]: static US state abbreviation and coordinate tables
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every request recomputes its output from the cached dataset; nothing is
//! updated incrementally.

pub mod api;
pub mod config;
pub mod io;
pub mod models;
pub mod reference;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;
