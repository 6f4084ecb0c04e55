//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Anonymo configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);

        match config.database {
            Some(ref db) => {
                println!("  Database: {}", db.kind);
                println!("  Connection: {}", db.connection_params().redacted_url());
                println!("  Max Connections: {}", db.max_connections);
            }
            None => println!("  Database: not configured (file sources only)"),
        }

        println!("  Default Method: {}", config.anonymization.method);
        println!(
            "  Salted Hashing: {}",
            if config.anonymization.salt.is_some() {
                "yes"
            } else {
                "no"
            }
        );
        println!("  Preview Page Size: {}", config.preview.page_size);
        println!("  Output Directory: {}", config.export.output_dir.display());
        println!(
            "  Export Formats: {}",
            [("csv", config.export.csv), ("xlsx", config.export.xlsx)]
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }

        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\npage_size = 25").unwrap();
        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_OK);
    }

    #[tokio::test]
    async fn test_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\npage_size = 0").unwrap();
        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let code = ValidateArgs {}
            .execute("/nonexistent/anonymo.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }
}
