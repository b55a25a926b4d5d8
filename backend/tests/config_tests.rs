mod support;

use std::path::PathBuf;

use sales_dash::config::{ConfigError, DashboardConfig};
use support::{with_scoped_env, write_temp_file};

#[test]
fn test_env_overrides_defaults() {
    let config = with_scoped_env(
        &[
            ("DASHBOARD_CONFIG", None),
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9090")),
            ("DATASET_PATH", Some("/data/adidas.csv")),
        ],
        || DashboardConfig::default().with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.dataset.path, PathBuf::from("/data/adidas.csv"));
}

#[test]
fn test_invalid_port_env() {
    let result = with_scoped_env(&[("PORT", Some("eighty"))], || {
        DashboardConfig::default().with_env_overrides()
    });
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_load_from_explicit_file() {
    let file = write_temp_file("[server]\nport = 7070\n\n[dataset]\npreview_rows = 5\n");
    let path = file.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &[
            ("DASHBOARD_CONFIG", Some(path.as_str())),
            ("HOST", None),
            ("PORT", None),
            ("DATASET_PATH", None),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.dataset.preview_rows, 5);
    assert_eq!(config.dataset.path, PathBuf::from("Dataset.csv"));
}

#[test]
fn test_env_wins_over_file() {
    let file = write_temp_file("[server]\nport = 7070\n");
    let path = file.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &[
            ("DASHBOARD_CONFIG", Some(path.as_str())),
            ("PORT", Some("6060")),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.port, 6060);
}
