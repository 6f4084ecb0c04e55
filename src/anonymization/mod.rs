//! Anonymization module for Anonymo
//!
//! Column-level anonymization of in-memory tables.
//!
//! # Architecture
//!
//! - **Methods**: [`AnonymizationMethod`] identifiers `Hash`, `Mask`, `Generalize`
//! - **Strategies**: one [`anonymizer::CellTransform`] per method, resolved once per call
//! - **Engine**: applies a strategy to the selected columns, skipping missing cells
//! - **Report**: per-column counts of what a run touched
//!
//! # Usage
//!
//! ```rust
//! use anonymo::anonymization::{AnonymizationEngine, AnonymizationMethod};
//! use anonymo::domain::Table;
//!
//! # fn example(table: &Table) -> anonymo::domain::Result<()> {
//! let engine = AnonymizationEngine::default();
//! let (anonymized, report) = engine.run(table, &["email"], AnonymizationMethod::Hash);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod anonymizer;
pub mod config;
pub mod engine;
pub mod report;

pub use config::{AnonymizationConfig, AnonymizationMethod};
pub use engine::{anonymize, anonymize_named, AnonymizationEngine};
pub use report::{AnonymizationReport, ColumnSummary};
