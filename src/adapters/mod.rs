//! Tabular data sources for Anonymo.
//!
//! This module provides adapters that turn external data into a
//! [`Table`](crate::domain::Table):
//!
//! - [`file`] - uploaded CSV and XLSX files
//! - [`database`] - database abstraction layer (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with in-memory implementations. Database sources implement
//! the [`TableSource`](database::TableSource) trait and are created by
//! [`connect`](database::connect) from connection parameters.
//!
//! ```rust,no_run
//! use anonymo::adapters::database::{connect, ConnectionParams, DatabaseKind};
//! use anonymo::config::secret_string;
//!
//! # async fn example() -> anonymo::domain::Result<()> {
//! let params = ConnectionParams {
//!     kind: DatabaseKind::PostgreSql,
//!     host: "localhost".to_string(),
//!     port: "5432".to_string(),
//!     username: "analyst".to_string(),
//!     password: secret_string("secret".to_string()),
//!     database: "crm".to_string(),
//!     max_connections: 4,
//!     connection_timeout_seconds: 30,
//! };
//!
//! let source = connect(&params).await?;
//! for table in source.list_tables().await? {
//!     println!("{table}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod file;
pub mod postgresql;
