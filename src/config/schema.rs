//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! usable configuration for file-based anonymization. The `[database]`
//! section is only required for database sources.

use crate::adapters::database::params::{
    DEFAULT_CONNECTION_TIMEOUT_SECONDS, DEFAULT_MAX_CONNECTIONS,
};
use crate::adapters::database::{ConnectionParams, DatabaseKind};
use crate::anonymization::config::AnonymizationConfig;
use crate::config::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Main Anonymo configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnonymoConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Database source (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    /// Anonymization defaults
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Preview pagination
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Export artifacts
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AnonymoConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        if let Some(ref database) = self.database {
            database.validate()?;
        }
        self.anonymization.validate()?;
        self.preview.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Database connection settings
///
/// Host, port, username, password and database name are opaque strings
/// handed to the connection layer; they are only checked for emptiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database dialect (mysql, postgresql, sqlserver)
    pub kind: DatabaseKind,

    /// Server host
    #[serde(default)]
    pub host: String,

    /// Server port, given as a string or an integer
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: String,

    /// Username
    #[serde(default)]
    pub username: String,

    /// Password
    /// Stored securely in memory and automatically zeroized on drop
    pub password: SecretString,

    /// Database name
    #[serde(default, alias = "dbname")]
    pub database: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout_seconds")]
    pub connection_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        self.connection_params()
            .validate()
            .map_err(|e| e.to_string())?;

        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(format!(
                "database.max_connections must be between 1 and 100, got {}",
                self.max_connections
            ));
        }

        if self.connection_timeout_seconds == 0 {
            return Err("database.connection_timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }

    /// Connection parameters for the connection layer
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            kind: self.kind,
            host: self.host.clone(),
            port: self.port.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
            max_connections: self.max_connections,
            connection_timeout_seconds: self.connection_timeout_seconds,
        }
    }
}

/// Preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Rows per preview page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl PreviewConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("preview.page_size must be >= 1".to_string());
        }
        Ok(())
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Write `anonymized_data.csv`
    #[serde(default = "default_true")]
    pub csv: bool,

    /// Write `anonymized_data.xlsx`
    #[serde(default = "default_true")]
    pub xlsx: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.csv && !self.xlsx {
            return Err("At least one of export.csv or export.xlsx must be enabled".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            csv: true,
            xlsx: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(s) => s,
        Port::Number(n) => n.to_string(),
    })
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> usize {
    DEFAULT_MAX_CONNECTIONS
}

fn default_connection_timeout_seconds() -> u64 {
    DEFAULT_CONNECTION_TIMEOUT_SECONDS
}

fn default_page_size() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
