#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use sales_dash::api::{Dataset, DatasetLoader, SalesRecord};
use tempfile::NamedTempFile;

/// Ten rows shaped like the real export, with extra columns the loader ignores.
pub const SAMPLE_CSV: &str = include_str!("../fixtures/sales_sample.csv");

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Write `content` to a temporary file that lives as long as the handle.
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

pub fn sample_dataset() -> Dataset {
    DatasetLoader::load_from_str(SAMPLE_CSV).unwrap()
}

pub fn record(retailer: &str, month: &str, state: &str, total_sales: f64) -> SalesRecord {
    SalesRecord {
        retailer: retailer.to_string(),
        month: month.to_string(),
        state: state.to_string(),
        region: "South".to_string(),
        product: "Men's Apparel".to_string(),
        total_sales,
    }
}

/// The three-record example used throughout the dashboard docs.
pub fn texas_maine_records() -> Vec<SalesRecord> {
    vec![
        record("Walmart", "January", "Texas", 100.0),
        record("Walmart", "February", "Texas", 50.0),
        record("Amazon", "January", "Maine", 25.0),
    ]
}
