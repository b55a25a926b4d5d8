//! Sales dashboard HTTP server binary.
//!
//! Loads the dataset once, sets up the HTTP router, and starts serving
//! requests. A dataset that fails to load stops the server before it binds.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=Dataset.csv cargo run --bin sales-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: `dashboard.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: CSV file to serve (default: Dataset.csv)
//! - `RUST_LOG`: Log filter directives, e.g. `sales_dash=debug,info` (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use sales_dash::config::DashboardConfig;
use sales_dash::http::{create_router, log_filter, AppState};
use sales_dash::io::DatasetCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting sales dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    let cache = Arc::new(DatasetCache::new(&config.dataset.path));
    let dataset = cache.get_or_load().map_err(|e| {
        error!("{}", e);
        e
    })?;
    info!(
        "Dataset ready: {} records from {}",
        dataset.len(),
        config.dataset.path.display()
    );

    let state = AppState::new(cache).with_preview_rows(config.dataset.preview_rows);
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Dashboard data: http://{}/v1/dashboard", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
