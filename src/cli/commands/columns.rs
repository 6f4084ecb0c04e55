//! Columns command implementation

use super::{load_settings, report_error, DatabaseArgs, EXIT_OK};
use clap::Args;

/// Arguments for the columns command
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Table to describe
    pub table: String,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ColumnsArgs {
    /// Execute the columns command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(c) => c,
            Err(e) => return Ok(report_error("Failed to load configuration", &e)),
        };

        let source = match self.database.connect(&config).await {
            Ok(s) => s,
            Err(e) => return Ok(report_error("Failed to connect to database", &e)),
        };

        let columns = match source.list_columns(&self.table).await {
            Ok(c) => c,
            Err(e) => return Ok(report_error("Failed to list columns", &e)),
        };

        tracing::info!(table = %self.table, count = columns.len(), "Listed columns");

        for column in columns {
            println!("{column}");
        }

        Ok(EXIT_OK)
    }
}
