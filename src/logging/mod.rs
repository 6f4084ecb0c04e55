//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! Log events carry counts, column names, table names and redacted URLs,
//! never cell values.
//!
//! # Example
//!
//! ```no_run
//! use anonymo::logging::init_logging;
//! use anonymo::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(rows = 42, "Table loaded");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an anonymization run
///
/// # Example
///
/// ```no_run
/// use anonymo::log_anonymization_start;
///
/// let columns = vec!["email".to_string()];
/// log_anonymization_start!("customers.csv", &columns, "Hash");
/// ```
#[macro_export]
macro_rules! log_anonymization_start {
    ($source:expr, $columns:expr, $method:expr) => {
        tracing::info!(
            source = %$source,
            columns = ?$columns,
            method = %$method,
            "Starting anonymization"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use anonymo::log_error_with_context;
/// use anonymo::domain::AnonymoError;
///
/// let error = AnonymoError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
