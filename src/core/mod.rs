//! Core workflow for Anonymo.
//!
//! # Modules
//!
//! - [`preview`] - Page-by-page views of a table
//! - [`export`] - CSV and XLSX artifacts of the anonymized table
//! - [`session`] - State of one load, anonymize, preview, export workflow
//!
//! # Workflow
//!
//! 1. **Load**: read a table from a file or a database source
//! 2. **Anonymize**: transform the selected columns
//! 3. **Preview**: page through the result
//! 4. **Export**: serialize the result as CSV and XLSX
//!
//! # Example
//!
//! ```rust
//! use anonymo::adapters::file::load_bytes;
//! use anonymo::anonymization::AnonymizationMethod;
//! use anonymo::core::export::ExportFormats;
//! use anonymo::core::session::Session;
//!
//! # fn example() -> anonymo::domain::Result<()> {
//! let mut session = Session::default();
//! session.load("people.csv", load_bytes("people.csv", b"id,email\n1,a@x.com\n")?);
//!
//! let report = session.anonymize(&["email"], AnonymizationMethod::Hash)?;
//! println!("{report}");
//!
//! let page = session.preview(10, 1)?;
//! assert_eq!(page.len(), 1);
//!
//! let artifacts = session.export(ExportFormats::default())?;
//! assert_eq!(artifacts.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod export;
pub mod preview;
pub mod session;
