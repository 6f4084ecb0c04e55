//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Anonymo using clap.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};

/// Anonymo - tabular data anonymization
#[derive(Parser, Debug)]
#[command(name = "anonymo")]
#[command(version, about, long_about = None)]
#[command(author = "Anonymo Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "anonymo.toml", env = "ANONYMO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ANONYMO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tables of the configured database
    Tables(commands::tables::TablesArgs),

    /// List the columns of a database table
    Columns(commands::columns::ColumnsArgs),

    /// Anonymize a file or database table, preview and export the result
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
