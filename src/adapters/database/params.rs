//! Database connection parameters

use crate::config::{secret_string, SecretString};
use crate::domain::{AnonymoError, Result};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default size of the connection pool
pub const DEFAULT_MAX_CONNECTIONS: usize = 4;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECTION_TIMEOUT_SECONDS: u64 = 30;

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    /// MySQL
    #[serde(rename = "mysql")]
    MySql,
    /// PostgreSQL
    #[serde(rename = "postgresql")]
    PostgreSql,
    /// Microsoft SQL Server
    #[serde(rename = "sqlserver")]
    SqlServer,
}

impl DatabaseKind {
    /// All dialects in presentation order
    pub const ALL: [DatabaseKind; 3] = [
        DatabaseKind::MySql,
        DatabaseKind::PostgreSql,
        DatabaseKind::SqlServer,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::SqlServer => "SQL Server",
        }
    }

    /// Configuration identifier
    pub fn config_name(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::SqlServer => "sqlserver",
        }
    }

    /// Scheme of the connection URL
    pub fn url_scheme(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::SqlServer => "mssql",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DatabaseKind {
    type Err = AnonymoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.display_name() == s || k.config_name() == s)
            .ok_or_else(|| {
                AnonymoError::Configuration(format!(
                    "Unknown database kind '{}'. Must be one of: mysql, postgresql, sqlserver",
                    s
                ))
            })
    }
}

/// Everything needed to open a database source
///
/// Host, port, username, password and database name are opaque; the only
/// validation is that none of them is empty.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    /// Dialect
    pub kind: DatabaseKind,
    /// Server host
    pub host: String,
    /// Server port
    pub port: String,
    /// Username
    pub username: String,
    /// Password
    pub password: SecretString,
    /// Database name
    pub database: String,
    /// Maximum number of pooled connections
    pub max_connections: usize,
    /// Connection timeout in seconds
    pub connection_timeout_seconds: u64,
}

impl ConnectionParams {
    /// Parameters for `kind` with empty connection fields and default pool
    /// settings
    pub fn new(kind: DatabaseKind) -> Self {
        Self {
            kind,
            host: String::new(),
            port: String::new(),
            username: String::new(),
            password: secret_string(String::new()),
            database: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connection_timeout_seconds: DEFAULT_CONNECTION_TIMEOUT_SECONDS,
        }
    }

    /// Validate that every connection field is present
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("host", self.host.as_str()),
            ("port", self.port.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.expose_secret().as_str()),
            ("database", self.database.as_str()),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AnonymoError::Configuration(format!(
                    "database.{} cannot be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Connection URL in the dialect's scheme, credentials included
    pub fn connection_url(&self) -> SecretString {
        secret_string(self.url_with_password(self.password.expose_secret().as_str()))
    }

    /// Connection URL with the password replaced by `***`
    pub fn redacted_url(&self) -> String {
        self.url_with_password("***")
    }

    fn url_with_password(&self, password: &str) -> String {
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.kind.url_scheme(),
            self.username,
            password,
            self.host,
            self.port,
            self.database
        )
    }
}
