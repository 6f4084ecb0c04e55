//! Tables command implementation

use super::{load_settings, report_error, DatabaseArgs, EXIT_OK};
use clap::Args;

/// Arguments for the tables command
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl TablesArgs {
    /// Execute the tables command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(c) => c,
            Err(e) => return Ok(report_error("Failed to load configuration", &e)),
        };

        let source = match self.database.connect(&config).await {
            Ok(s) => s,
            Err(e) => return Ok(report_error("Failed to connect to database", &e)),
        };

        let tables = match source.list_tables().await {
            Ok(t) => t,
            Err(e) => return Ok(report_error("Failed to list tables", &e)),
        };

        tracing::info!(source = %source.source_name(), count = tables.len(), "Listed tables");

        if tables.is_empty() {
            println!("No tables found");
        }
        for table in tables {
            println!("{table}");
        }

        Ok(EXIT_OK)
    }
}
