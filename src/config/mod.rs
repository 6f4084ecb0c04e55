//! Configuration management for Anonymo.
//!
//! # Overview
//!
//! Anonymo reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ANONYMO_<SECTION>_<KEY>` environment overrides
//! - Default values for every optional setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`DatabaseConfig`] - Database source connection (optional)
//! - [`AnonymizationConfig`](crate::anonymization::AnonymizationConfig) - Default method and hash salt
//! - [`PreviewConfig`] - Preview page size
//! - [`ExportConfig`] - Output directory and formats
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [database]
//! kind = "postgresql"
//! host = "localhost"
//! port = 5432
//! username = "anonymo"
//! password = "${ANONYMO_DB_PASSWORD}"
//! database = "crm"
//!
//! [anonymization]
//! method = "Hash"
//!
//! [preview]
//! page_size = 10
//!
//! [export]
//! output_dir = "./out"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    AnonymoConfig, ApplicationConfig, DatabaseConfig, ExportConfig, LoggingConfig, PreviewConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
