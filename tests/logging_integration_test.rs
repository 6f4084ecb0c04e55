//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so the
//! whole lifecycle runs in a single test.

use anonymo::config::LoggingConfig;
use anonymo::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(init_logging("verbose", &config).is_err());
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    assert!(guard.has_file_output());
    assert!(log_path.is_dir());

    tracing::info!(rows = 3, "Logged from test");
    drop(guard);
    assert!(log_path.join("anonymo.log").exists());

    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
