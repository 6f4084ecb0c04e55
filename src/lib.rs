// Anonymo - Tabular Data Anonymization Tool
// Copyright (c) 2025 Anonymo Contributors
// Licensed under the MIT License

//! # Anonymo - Tabular Data Anonymization
//!
//! Anonymo loads a table from a CSV or XLSX file or from a relational
//! database, replaces the values of selected columns with a one-way
//! transformation, and exports the result as CSV and XLSX.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** tables from files or database sources
//! - **Anonymizing** selected columns with `Hash`, `Mask` or `Generalize`
//! - **Previewing** the result page by page
//! - **Exporting** the result as `anonymized_data.csv` and `anonymized_data.xlsx`
//!
//! ## Architecture
//!
//! Anonymo follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Workflow (session, preview, export)
//! - [`anonymization`] - Anonymization methods and engine
//! - [`adapters`] - Data sources (files, PostgreSQL)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anonymo::adapters::file::load_path;
//! use anonymo::anonymization::{anonymize, AnonymizationMethod};
//! use anonymo::core::export::{export_artifacts, write_artifacts};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_path("customers.csv")?;
//!     let anonymized = anonymize(&table, &["email", "phone"], AnonymizationMethod::Hash);
//!
//!     let artifacts = export_artifacts(&anonymized)?;
//!     write_artifacts("out", &artifacts)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Database Sources
//!
//! ```rust,no_run
//! use anonymo::adapters::database::{connect, ConnectionParams, DatabaseKind};
//! use anonymo::config::secret_string;
//!
//! # async fn example() -> anonymo::domain::Result<()> {
//! let mut params = ConnectionParams::new(DatabaseKind::PostgreSql);
//! params.host = "localhost".to_string();
//! params.port = "5432".to_string();
//! params.username = "analyst".to_string();
//! params.password = secret_string("secret".to_string());
//! params.database = "crm".to_string();
//!
//! let source = connect(&params).await?;
//! for table in source.list_tables().await? {
//!     println!("{table}: {:?}", source.list_columns(&table).await?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Anonymo uses the [`domain::AnonymoError`] type for all errors:
//!
//! ```rust,no_run
//! use anonymo::domain::AnonymoError;
//!
//! fn example() -> Result<(), AnonymoError> {
//!     let config = anonymo::config::load_config("anonymo.toml")?;
//!     println!("page size: {}", config.preview.page_size);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Anonymo uses structured logging with the `tracing` crate. Events carry
//! counts and names, never cell values:
//!
//! ```rust,no_run
//! use tracing::info;
//!
//! info!(rows = 120, columns = 2, "Anonymized table");
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
