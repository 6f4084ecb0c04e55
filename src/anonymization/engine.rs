//! Main anonymization engine
//!
//! The engine takes a table, a set of target column names and a method, and
//! produces a new table in which every non-missing cell of the targeted
//! columns has been replaced. Everything else is copied as-is:
//!
//! - row count, column count, column names and column order never change;
//! - missing cells pass through untouched under every method;
//! - names that are not columns of the table are skipped silently;
//! - the input table is never mutated.
//!
//! Output is fully deterministic for a given table, selection and method.
//!
//! # Examples
//!
//! ```
//! use anonymo::anonymization::{anonymize, AnonymizationMethod};
//! use anonymo::domain::{CellValue, Table};
//!
//! let table = Table::from_rows(
//!     ["id", "name", "email"],
//!     vec![vec![CellValue::Integer(1), "Alice".into(), "a@x.com".into()]],
//! ).unwrap();
//!
//! let masked = anonymize(&table, &["email"], AnonymizationMethod::Mask);
//! assert_eq!(masked.row(0).unwrap()[2], &CellValue::from("****"));
//! assert_eq!(masked.row(0).unwrap()[1], &CellValue::from("Alice"));
//! ```

use crate::anonymization::{
    anonymizer::{self, CellTransform},
    config::{AnonymizationConfig, AnonymizationMethod},
    report::{AnonymizationReport, ColumnSummary},
};
use crate::domain::{Result, Table};
use std::collections::HashSet;
use std::time::Instant;

/// Anonymize `column_names` of `table` with `method`
///
/// This is the unsalted form; use [`AnonymizationEngine`] for a salted hash
/// or a run report.
pub fn anonymize<S: AsRef<str>>(
    table: &Table,
    column_names: &[S],
    method: AnonymizationMethod,
) -> Table {
    let strategy = anonymizer::resolve(method, None);
    apply(table, column_names, strategy.as_ref()).0
}

/// Anonymize with a method given by its identifier
///
/// # Errors
///
/// Returns [`AnonymoError::UnsupportedMethod`](crate::domain::AnonymoError::UnsupportedMethod)
/// for an unknown identifier. The input table is borrowed, so the caller
/// keeps it unchanged.
pub fn anonymize_named<S: AsRef<str>>(
    table: &Table,
    column_names: &[S],
    method_name: &str,
) -> Result<Table> {
    let method: AnonymizationMethod = method_name.parse()?;
    Ok(anonymize(table, column_names, method))
}

/// Anonymization engine
///
/// Holds the engine-level settings (currently the optional hash salt) and
/// produces an [`AnonymizationReport`] alongside each transformed table.
/// The engine is stateless across calls.
#[derive(Debug, Clone, Default)]
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are invalid.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .map_err(crate::domain::AnonymoError::Configuration)?;
        Ok(Self { config })
    }

    /// Method used when the caller does not choose one
    pub fn default_method(&self) -> AnonymizationMethod {
        self.config.method
    }

    /// Whether hash digests are salted
    pub fn is_salted(&self) -> bool {
        self.config.salt.is_some()
    }

    /// Anonymize a table and report what was touched
    pub fn run<S: AsRef<str>>(
        &self,
        table: &Table,
        column_names: &[S],
        method: AnonymizationMethod,
    ) -> (Table, AnonymizationReport) {
        let start = Instant::now();
        let strategy = anonymizer::resolve(method, self.config.salt.as_ref());
        let (anonymized, mut report) = apply(table, column_names, strategy.as_ref());
        report.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            method = %method,
            rows = report.row_count,
            columns = report.columns.len(),
            transformed = report.total_transformed(),
            skipped = report.skipped_columns.len(),
            duration_ms = report.processing_time_ms,
            "Anonymized table"
        );

        (anonymized, report)
    }

    /// Like [`run`](Self::run) with the method given by its identifier
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMethod` for an unknown identifier; the input table
    /// is left untouched.
    pub fn run_named<S: AsRef<str>>(
        &self,
        table: &Table,
        column_names: &[S],
        method_name: &str,
    ) -> Result<(Table, AnonymizationReport)> {
        let method: AnonymizationMethod = method_name.parse().map_err(|e| {
            tracing::warn!(method = %method_name, "Unsupported anonymization method");
            e
        })?;
        Ok(self.run(table, column_names, method))
    }
}

/// Apply a resolved strategy to the selected columns
fn apply<S: AsRef<str>>(
    table: &Table,
    column_names: &[S],
    strategy: &dyn CellTransform,
) -> (Table, AnonymizationReport) {
    let mut report = AnonymizationReport::new(strategy.method(), table.row_count());
    let mut targets = HashSet::new();

    for name in column_names {
        let name = name.as_ref();
        match table.column_index(name) {
            Some(index) => {
                targets.insert(index);
            }
            None => {
                tracing::debug!(column = %name, "Skipping column not present in table");
                if !report.skipped_columns.iter().any(|s| s == name) {
                    report.skipped_columns.push(name.to_string());
                }
            }
        }
    }

    let anonymized = table.map_columns(&targets, |value| {
        if value.is_missing() {
            value.clone()
        } else {
            strategy.transform(value)
        }
    });

    for (index, column) in table.columns().iter().enumerate() {
        if targets.contains(&index) {
            let missing = column.missing_count();
            report.columns.push(ColumnSummary {
                name: column.name().to_string(),
                transformed: column.len() - missing,
                missing,
            });
        }
    }

    (anonymized, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::{AnonymoError, CellValue};

    fn people() -> Table {
        Table::from_rows(
            ["id", "name", "email"],
            vec![
                vec![1i64.into(), "Alice".into(), "a@x.com".into()],
                vec![2i64.into(), "Bob".into(), CellValue::Null],
                vec![3i64.into(), "Alice".into(), "a@x.com".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_mask_selected_column() {
        let table = people();
        let masked = anonymize(&table, &["email"], AnonymizationMethod::Mask);

        let first = masked.row(0).unwrap();
        assert_eq!(first[0], &CellValue::Integer(1));
        assert_eq!(first[1], &CellValue::from("Alice"));
        assert_eq!(first[2], &CellValue::from("****"));
        assert_eq!(masked.row(1).unwrap()[2], &CellValue::Null);
    }

    #[test]
    fn test_input_not_mutated() {
        let table = people();
        let before = table.clone();
        let _ = anonymize(&table, &["name", "email"], AnonymizationMethod::Generalize);
        assert_eq!(table, before);
    }

    #[test]
    fn test_equal_values_hash_equal() {
        let table = people();
        let hashed = anonymize(&table, &["name"], AnonymizationMethod::Hash);
        let names = hashed.column("name").unwrap().values();
        assert_eq!(names[0], names[2]);
        assert_ne!(names[0], names[1]);
    }

    #[test]
    fn test_absent_column_skipped() {
        let table = people();
        let engine = AnonymizationEngine::default();
        let (result, report) = engine.run(&table, &["ghost", "ghost"], AnonymizationMethod::Mask);
        assert_eq!(result, table);
        assert_eq!(report.skipped_columns, vec!["ghost".to_string()]);
        assert!(!report.has_changes());
    }

    #[test]
    fn test_report_counts() {
        let table = people();
        let engine = AnonymizationEngine::default();
        let (_, report) = engine.run(&table, &["email", "id"], AnonymizationMethod::Hash);

        // Report follows table order, not selection order
        assert_eq!(report.columns[0].name, "id");
        assert_eq!(report.columns[1].name, "email");
        assert_eq!(report.columns[1].transformed, 2);
        assert_eq!(report.columns[1].missing, 1);
    }

    #[test]
    fn test_unknown_method_name() {
        let table = people();
        let err = anonymize_named(&table, &["email"], "Shuffle").unwrap_err();
        assert!(matches!(err, AnonymoError::UnsupportedMethod(_)));

        let engine = AnonymizationEngine::default();
        assert!(engine.run_named(&table, &["email"], "hash").is_err());
    }

    #[test]
    fn test_salted_engine() {
        let table = people();
        let engine = AnonymizationEngine::new(AnonymizationConfig {
            method: AnonymizationMethod::Hash,
            salt: Some(secret_string("s3cret".to_string())),
        })
        .unwrap();
        assert!(engine.is_salted());

        let (salted, _) = engine.run(&table, &["email"], AnonymizationMethod::Hash);
        let unsalted = anonymize(&table, &["email"], AnonymizationMethod::Hash);
        assert_ne!(salted, unsalted);
        assert_eq!(salted.row(1).unwrap()[2], &CellValue::Null);
    }
}
