//! Domain models and types for Anonymo.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Tabular data** ([`Table`], [`Column`], [`CellValue`])
//! - **Error types** ([`AnonymoError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use anonymo::domain::{CellValue, Table};
//!
//! # fn example() -> anonymo::domain::Result<()> {
//! let table = Table::from_rows(
//!     ["id", "email"],
//!     vec![
//!         vec![CellValue::Integer(1), CellValue::from("a@x.com")],
//!         vec![CellValue::Integer(2), CellValue::Null],
//!     ],
//! )?;
//! assert_eq!(table.row_count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod result;
pub mod table;
pub mod value;

pub use errors::AnonymoError;
pub use result::Result;
pub use table::{Column, Table};
pub use value::CellValue;
