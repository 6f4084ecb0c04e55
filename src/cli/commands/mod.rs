//! CLI command implementations
//!
//! Commands return their process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 2 | Configuration or usage error |
//! | 3 | Source error (connection, format, parse) |
//! | 5 | Fatal error |

pub mod anonymize;
pub mod columns;
pub mod tables;
pub mod validate;

use crate::adapters::database::{connect, ConnectionParams, DatabaseKind, TableSource};
use crate::config::{load_config_or_default, secret_string, AnonymoConfig};
use crate::domain::{AnonymoError, Result};
use clap::Args;

/// Exit code for success
pub const EXIT_OK: i32 = 0;

/// Exit code for configuration and usage errors
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for data source errors
pub const EXIT_SOURCE: i32 = 3;

/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;

/// Map an error to the exit code reported for it
pub fn exit_code(error: &AnonymoError) -> i32 {
    match error {
        AnonymoError::Configuration(_)
        | AnonymoError::UnsupportedMethod(_)
        | AnonymoError::InvalidPageSize
        | AnonymoError::PageOutOfRange { .. } => EXIT_CONFIG,
        e if e.is_source_error() => EXIT_SOURCE,
        _ => EXIT_FATAL,
    }
}

/// Print an error for the user and return its exit code
pub(crate) fn report_error(context: &str, error: &AnonymoError) -> i32 {
    crate::log_error_with_context!(error, context);
    println!("❌ {context}");
    println!("   Error: {error}");
    exit_code(error)
}

/// Load the configuration file, falling back to defaults when it is absent
pub(crate) fn load_settings(config_path: &str) -> Result<AnonymoConfig> {
    load_config_or_default(config_path)
}

/// Database connection flags, overriding the `[database]` section
#[derive(Args, Debug, Default, Clone)]
pub struct DatabaseArgs {
    /// Database kind (mysql, postgresql, sqlserver)
    #[arg(long = "db-kind")]
    pub kind: Option<DatabaseKind>,

    /// Database host
    #[arg(long = "db-host")]
    pub host: Option<String>,

    /// Database port
    #[arg(long = "db-port")]
    pub port: Option<String>,

    /// Database username
    #[arg(long = "db-user")]
    pub username: Option<String>,

    /// Database password
    #[arg(long = "db-password", env = "ANONYMO_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database name
    #[arg(long = "db-name")]
    pub database: Option<String>,
}

impl DatabaseArgs {
    /// Merge the flags over the configured database
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no database is configured or a
    /// connection field is empty.
    pub fn resolve(&self, config: &AnonymoConfig) -> Result<ConnectionParams> {
        let mut params = match (&config.database, self.kind) {
            (Some(db), _) => db.connection_params(),
            (None, Some(kind)) => ConnectionParams::new(kind),
            (None, None) => {
                return Err(AnonymoError::Configuration(
                    "No database configured: add a [database] section or pass --db-kind"
                        .to_string(),
                ))
            }
        };

        if let Some(kind) = self.kind {
            params.kind = kind;
        }
        if let Some(ref host) = self.host {
            params.host = host.clone();
        }
        if let Some(ref port) = self.port {
            params.port = port.clone();
        }
        if let Some(ref username) = self.username {
            params.username = username.clone();
        }
        if let Some(ref password) = self.password {
            params.password = secret_string(password.clone());
        }
        if let Some(ref database) = self.database {
            params.database = database.clone();
        }

        params.validate()?;
        Ok(params)
    }

    /// Resolve the parameters and connect
    ///
    /// # Errors
    ///
    /// Returns a configuration error for missing parameters and
    /// `ConnectionFailure` when the database cannot be reached.
    pub async fn connect(&self, config: &AnonymoConfig) -> Result<Box<dyn TableSource>> {
        let params = self.resolve(config)?;
        connect(&params).await
    }
}
