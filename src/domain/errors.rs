//! Domain error types
//!
//! Every failure at the core boundary is a recoverable, user-visible condition.
//! Third-party error types are converted to strings at the boundary so they
//! never leak through the public API.

use thiserror::Error;

/// Main Anonymo error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnonymoError {
    /// Cannot reach or authenticate to a database
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// File extension not recognized
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File content malformed for its claimed format
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unknown anonymization method identifier
    #[error("Unsupported anonymization method: {0}")]
    UnsupportedMethod(String),

    /// Preview page index outside `[1, total]`
    #[error("Page {requested} is out of range (table has {total} pages)")]
    PageOutOfRange { requested: usize, total: usize },

    /// Page size of zero
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// Table shape violates its invariants (duplicate names, ragged columns)
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Query or schema errors after a connection was established
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rendering CSV/XLSX output failed
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl AnonymoError {
    /// Whether the error came from the data source (connection, format or parse)
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            AnonymoError::ConnectionFailure(_)
                | AnonymoError::UnsupportedFormat(_)
                | AnonymoError::ParseError(_)
                | AnonymoError::Database(_)
        )
    }
}

impl From<std::io::Error> for AnonymoError {
    fn from(err: std::io::Error) -> Self {
        AnonymoError::Io(err.to_string())
    }
}

impl From<csv::Error> for AnonymoError {
    fn from(err: csv::Error) -> Self {
        AnonymoError::ParseError(format!("CSV: {err}"))
    }
}

impl From<calamine::XlsxError> for AnonymoError {
    fn from(err: calamine::XlsxError) -> Self {
        AnonymoError::ParseError(format!("XLSX: {err}"))
    }
}

impl From<rust_xlsxwriter::XlsxError> for AnonymoError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AnonymoError::Export(format!("XLSX: {err}"))
    }
}

impl From<toml::de::Error> for AnonymoError {
    fn from(err: toml::de::Error) -> Self {
        AnonymoError::Configuration(format!("TOML parse error: {err}"))
    }
}
