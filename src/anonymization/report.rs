//! Anonymization run summaries
//!
//! A report records what an engine run touched without ever holding cell
//! values, so it is safe to log or print.

use crate::anonymization::config::AnonymizationMethod;
use serde::Serialize;
use std::fmt;

/// Per-column outcome of an anonymization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,

    /// Cells replaced by the method
    pub transformed: usize,

    /// Missing cells passed through unchanged
    pub missing: usize,
}

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizationReport {
    /// Method applied
    pub method: AnonymizationMethod,

    /// Rows in the table
    pub row_count: usize,

    /// Selected columns that exist in the table, in table order
    pub columns: Vec<ColumnSummary>,

    /// Selected names not present in the table
    pub skipped_columns: Vec<String>,

    /// Wall time spent transforming
    pub processing_time_ms: u64,
}

impl AnonymizationReport {
    /// Create an empty report for a method
    pub fn new(method: AnonymizationMethod, row_count: usize) -> Self {
        Self {
            method,
            row_count,
            columns: Vec::new(),
            skipped_columns: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Total number of replaced cells
    pub fn total_transformed(&self) -> usize {
        self.columns.iter().map(|c| c.transformed).sum()
    }

    /// Total number of missing cells left untouched
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }

    /// Whether any column was actually transformed
    pub fn has_changes(&self) -> bool {
        !self.columns.is_empty()
    }
}

impl fmt::Display for AnonymizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Rows: {}", self.row_count)?;
        for column in &self.columns {
            writeln!(
                f,
                "  {}: {} transformed, {} missing",
                column.name, column.transformed, column.missing
            )?;
        }
        if !self.skipped_columns.is_empty() {
            writeln!(f, "Skipped (not in table): {}", self.skipped_columns.join(", "))?;
        }
        Ok(())
    }
}
