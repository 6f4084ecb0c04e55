//! Anonymize command implementation
//!
//! Loads one table from a file or a database, anonymizes the selected
//! columns, prints the report and a preview page, and writes the export
//! artifacts.

use super::{load_settings, report_error, DatabaseArgs, EXIT_OK};
use crate::adapters::file::load_path;
use crate::anonymization::AnonymizationEngine;
use crate::cli::render::render_page;
use crate::config::AnonymoConfig;
use crate::core::export::{write_artifacts, ExportFormats};
use crate::core::session::Session;
use crate::domain::{Result, Table};
use crate::log_anonymization_start;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["file", "table"])
))]
pub struct AnonymizeArgs {
    /// CSV or XLSX file to anonymize
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Database table to anonymize
    #[arg(long)]
    pub table: Option<String>,

    /// Columns to anonymize (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Anonymization method (Hash, Mask, Generalize)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Preview page to print (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per preview page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Directory for the exported files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip writing export files
    #[arg(long)]
    pub no_export: bool,

    /// Print the anonymization report as JSON
    #[arg(long)]
    pub json_report: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(c) => c,
            Err(e) => return Ok(report_error("Failed to load configuration", &e)),
        };

        let engine = match AnonymizationEngine::new(config.anonymization.clone()) {
            Ok(e) => e,
            Err(e) => return Ok(report_error("Invalid anonymization settings", &e)),
        };

        let (label, table) = match self.load(&config).await {
            Ok(loaded) => loaded,
            Err(e) => return Ok(report_error("Failed to load data", &e)),
        };

        println!(
            "📄 Loaded {label}: {} rows, {} columns",
            table.row_count(),
            table.column_count()
        );

        let columns: Vec<&str> = self
            .columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();

        if columns.is_empty() {
            tracing::warn!(source = %label, "No columns selected");
            println!("⚠️  Please select columns to anonymize");
            return Ok(EXIT_OK);
        }

        let method_name = self
            .method
            .clone()
            .unwrap_or_else(|| engine.default_method().as_str().to_string());

        let mut session = Session::new(engine);
        session.load(label.clone(), table);

        log_anonymization_start!(label, columns, method_name);

        match session.anonymize_named(&columns, &method_name) {
            Ok(report) if self.json_report => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            Ok(report) => {
                println!("✅ Anonymization complete");
                print!("{report}");
            }
            Err(e) => return Ok(report_error("Anonymization failed", &e)),
        }

        // A bad page only affects the preview; the artifacts are still written
        let mut status = EXIT_OK;
        let page_size = self.page_size.unwrap_or(config.preview.page_size);
        if session.current().is_some_and(Table::is_empty) {
            println!("(no rows to preview)");
        } else {
            match session.preview(page_size, self.page) {
                Ok(page) => {
                    println!();
                    println!("{}", render_page(&page));
                }
                Err(e) => status = report_error("Preview failed", &e),
            }
        }

        if self.no_export {
            return Ok(status);
        }

        let formats = ExportFormats {
            csv: config.export.csv,
            xlsx: config.export.xlsx,
        };
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        let written = session
            .export(formats)
            .and_then(|artifacts| write_artifacts(&output_dir, &artifacts));

        match written {
            Ok(paths) => {
                println!();
                for path in paths {
                    println!("💾 Exported {}", path.display());
                }
                Ok(status)
            }
            Err(e) => Ok(report_error("Export failed", &e)),
        }
    }

    async fn load(&self, config: &AnonymoConfig) -> Result<(String, Table)> {
        if let Some(ref path) = self.file {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return Ok((label, load_path(path)?));
        }

        let table_name = self.table.clone().unwrap_or_default();
        let source = self.database.connect(config).await?;
        let table = source.load_table(&table_name).await?;
        Ok((table_name, table))
    }
}
