//! Database abstraction traits
//!
//! This module defines the trait that database sources must implement to
//! feed tables into Anonymo.

use crate::domain::{Result, Table};
use async_trait::async_trait;

/// A source of named tables
///
/// Implementations only enumerate and read; every call is idempotent.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Test the connection
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be reached.
    async fn test_connection(&self) -> Result<()>;

    /// List the tables available in the source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// List the columns of a table in schema-declared order
    ///
    /// # Arguments
    ///
    /// * `table_name` - Table to describe
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or the query fails.
    async fn list_columns(&self, table_name: &str) -> Result<Vec<String>>;

    /// Load every row of a table
    ///
    /// # Arguments
    ///
    /// * `table_name` - Table to load
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or the query fails.
    async fn load_table(&self, table_name: &str) -> Result<Table>;

    /// Name describing the source, safe for logs
    fn source_name(&self) -> String;
}
