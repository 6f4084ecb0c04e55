//! PostgreSQL client implementation
//!
//! This module provides the pooled client used by the PostgreSQL table source.

use crate::adapters::database::ConnectionParams;
use crate::domain::{AnonymoError, Result};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::{NoTls, Row, SimpleQueryMessage, SimpleQueryRow};

/// PostgreSQL client for Anonymo
///
/// Wraps a connection pool; connections are opened lazily on first use.
pub struct PostgresClient {
    /// Connection pool
    pool: Pool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client
    ///
    /// # Arguments
    ///
    /// * `params` - Validated connection parameters
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailure` if the port is not a number or the pool
    /// cannot be built.
    pub fn new(params: &ConnectionParams) -> Result<Self> {
        let port: u16 = params.port.trim().parse().map_err(|_| {
            AnonymoError::ConnectionFailure(format!("Invalid port '{}'", params.port))
        })?;
        let timeout = Duration::from_secs(params.connection_timeout_seconds);

        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&params.host)
            .port(port)
            .user(&params.username)
            .password(params.password.expose_secret().as_str())
            .dbname(&params.database)
            .application_name("anonymo")
            .connect_timeout(timeout);

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let pool = Pool::builder(manager)
            .max_size(params.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| {
                AnonymoError::ConnectionFailure(format!("Failed to create connection pool: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| {
            AnonymoError::ConnectionFailure(format!("Failed to get connection from pool: {}", e))
        })
    }

    /// Test the connection to PostgreSQL
    ///
    /// Attempts to get a connection from the pool and execute a simple query.
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| AnonymoError::ConnectionFailure(format!("Connection test failed: {}", e)))?;

        tracing::info!("PostgreSQL connection test successful");
        Ok(())
    }

    /// Execute a parameterized query and return rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(
        &self,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;

        client
            .query(query, params)
            .await
            .map_err(|e| AnonymoError::Database(format!("Query failed: {}", e)))
    }

    /// Execute a query over the simple protocol
    ///
    /// Every value comes back in its text form, which lets a `SELECT *`
    /// read columns of any type.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn simple_query(&self, query: &str) -> Result<Vec<SimpleQueryRow>> {
        let client = self.get_connection().await?;

        let messages = client
            .simple_query(query)
            .await
            .map_err(|e| AnonymoError::Database(format!("Query failed: {}", e)))?;

        Ok(messages
            .into_iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(row),
                _ => None,
            })
            .collect())
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::database::DatabaseKind;
    use crate::config::secret_string;

    fn params(port: &str) -> ConnectionParams {
        ConnectionParams {
            kind: DatabaseKind::PostgreSql,
            host: "localhost".to_string(),
            port: port.to_string(),
            username: "anonymo".to_string(),
            password: secret_string("password".to_string()),
            database: "crm".to_string(),
            max_connections: 2,
            connection_timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_pool_is_lazy() {
        let client = PostgresClient::new(&params("5432")).unwrap();
        let status = client.pool_status();
        assert_eq!(status.max_size, 2);
        assert_eq!(status.size, 0);
    }

    #[test]
    fn test_invalid_port() {
        let err = PostgresClient::new(&params("54x")).err().unwrap();
        assert!(matches!(err, AnonymoError::ConnectionFailure(_)));
    }
}
