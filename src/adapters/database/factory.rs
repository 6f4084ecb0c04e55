//! Table source factory
//!
//! This module creates database table sources from connection parameters.

use crate::adapters::database::params::{ConnectionParams, DatabaseKind};
use crate::adapters::database::traits::TableSource;
use crate::adapters::postgresql::{PostgresClient, PostgresSource};
use crate::domain::{AnonymoError, Result};

/// Connect to the database described by `params`
///
/// Validates the parameters, opens the connection and tests it before
/// returning the source.
///
/// # Errors
///
/// Returns a configuration error for empty parameters and
/// `ConnectionFailure` when the connection cannot be established or the
/// dialect has no driver.
pub async fn connect(params: &ConnectionParams) -> Result<Box<dyn TableSource>> {
    params.validate()?;

    tracing::info!(
        kind = %params.kind,
        url = %params.redacted_url(),
        "Connecting to database"
    );

    match params.kind {
        DatabaseKind::PostgreSql => {
            let client = PostgresClient::new(params)?;
            let source = PostgresSource::new(client, params.redacted_url());
            source.test_connection().await.map_err(|e| {
                AnonymoError::ConnectionFailure(format!(
                    "Could not connect to {}: {}",
                    params.redacted_url(),
                    e
                ))
            })?;
            Ok(Box::new(source))
        }
        DatabaseKind::MySql | DatabaseKind::SqlServer => {
            Err(AnonymoError::ConnectionFailure(format!(
                "No {} driver is available; cannot connect to {}",
                params.kind,
                params.redacted_url()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn params(kind: DatabaseKind) -> ConnectionParams {
        ConnectionParams {
            kind,
            host: "localhost".to_string(),
            port: "3306".to_string(),
            username: "root".to_string(),
            password: secret_string("pw".to_string()),
            database: "shop".to_string(),
            max_connections: 1,
            connection_timeout_seconds: 1,
        }
    }

    #[tokio::test]
    async fn test_unsupported_dialect_fails_to_connect() {
        for kind in [DatabaseKind::MySql, DatabaseKind::SqlServer] {
            let err = connect(&params(kind)).await.err().unwrap();
            assert!(matches!(err, AnonymoError::ConnectionFailure(_)));
            assert!(!err.to_string().contains("pw@"));
        }
    }

    #[tokio::test]
    async fn test_empty_params_rejected_before_connecting() {
        let mut p = params(DatabaseKind::PostgreSql);
        p.host = String::new();
        let err = connect(&p).await.err().unwrap();
        assert!(matches!(err, AnonymoError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_invalid_port_is_connection_failure() {
        let mut p = params(DatabaseKind::PostgreSql);
        p.port = "not-a-port".to_string();
        let err = connect(&p).await.err().unwrap();
        assert!(matches!(err, AnonymoError::ConnectionFailure(_)));
    }
}
