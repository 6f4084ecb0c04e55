//! PostgreSQL database integration
//!
//! This module reads tables from PostgreSQL through a `deadpool-postgres`
//! connection pool.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgresSource;
pub use client::PostgresClient;
pub use models::PgColumnType;
