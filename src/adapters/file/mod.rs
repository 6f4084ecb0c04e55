//! Uploaded file sources
//!
//! A file is turned into a [`Table`] according to its extension:
//!
//! - `.csv` - comma-separated text with a header row
//! - `.xlsx` - first worksheet of an Excel workbook, header row first
//!
//! Anything else is rejected with
//! [`AnonymoError::UnsupportedFormat`](crate::domain::AnonymoError::UnsupportedFormat).
//!
//! # Example
//!
//! ```rust
//! use anonymo::adapters::file::load_bytes;
//!
//! let table = load_bytes("people.csv", b"id,name\n1,Alice\n2,Bob\n").unwrap();
//! assert_eq!(table.row_count(), 2);
//! assert!(load_bytes("people.txt", b"id\n1\n").is_err());
//! ```

pub mod csv;
pub mod xlsx;

use crate::domain::{AnonymoError, CellValue, Result, Table};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// File format, decided once from the file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Spreadsheet,
    /// Anything else, with the offending extension (possibly empty)
    Unsupported(String),
}

impl FileFormat {
    /// Detect the format from a file name
    ///
    /// The comparison is exact: `DATA.CSV` is not a CSV file.
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".csv") {
            Self::Csv
        } else if file_name.ends_with(".xlsx") {
            Self::Spreadsheet
        } else {
            let extension = Path::new(file_name)
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            Self::Unsupported(extension)
        }
    }

    /// Whether the format can be loaded
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Spreadsheet => f.write_str("xlsx"),
            Self::Unsupported(ext) if ext.is_empty() => f.write_str("(no extension)"),
            Self::Unsupported(ext) => write!(f, ".{ext}"),
        }
    }
}

/// Load an uploaded file's contents
///
/// # Errors
///
/// Returns `UnsupportedFormat` for unknown extensions and `ParseError` when
/// the contents cannot be read as the detected format.
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<Table> {
    let format = FileFormat::from_file_name(file_name);

    let table = match format {
        FileFormat::Csv => csv::read_csv(bytes)?,
        FileFormat::Spreadsheet => xlsx::read_xlsx(bytes)?,
        FileFormat::Unsupported(_) => {
            tracing::warn!(file = %file_name, "Unsupported file format");
            return Err(AnonymoError::UnsupportedFormat(format!(
                "{} ({}); expected .csv or .xlsx",
                file_name, format
            )));
        }
    };

    tracing::info!(
        file = %file_name,
        format = %format,
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded file"
    );

    Ok(table)
}

/// Read a file from disk and load it
///
/// # Errors
///
/// Returns `UnsupportedFormat` before touching the disk for unknown
/// extensions, `Io` if the file cannot be read, and `ParseError` for bad
/// contents.
pub fn load_path(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let FileFormat::Unsupported(_) = FileFormat::from_file_name(&file_name) {
        return load_bytes(&file_name, &[]);
    }

    let bytes = std::fs::read(path).map_err(|e| {
        AnonymoError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    load_bytes(&file_name, &bytes)
}

/// Column name for a header cell, with positional names for blanks
pub(crate) fn header_name(raw: &str, index: usize) -> String {
    if raw.trim().is_empty() {
        format!("Unnamed: {index}")
    } else {
        raw.to_string()
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ... in order
///
/// A suffixed name that is already taken is bumped further, so the result is
/// always unique.
pub(crate) fn dedupe_header(header: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(header.len());
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(header.len());

    for name in header {
        let mut candidate = name.clone();
        if taken.contains(&candidate) {
            let count = counts.entry(name.clone()).or_insert(0);
            loop {
                *count += 1;
                candidate = format!("{name}.{count}");
                if !taken.contains(&candidate) {
                    break;
                }
            }
        }
        taken.insert(candidate.clone());
        out.push(candidate);
    }

    out
}

/// Build a table from parsed rows, reporting shape problems as parse errors
pub(crate) fn build_table(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Table> {
    Table::from_rows(dedupe_header(header), rows)
        .map_err(|e| AnonymoError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("data.csv", FileFormat::Csv)]
    #[test_case("report.final.xlsx", FileFormat::Spreadsheet)]
    #[test_case("data.txt", FileFormat::Unsupported("txt".to_string()))]
    #[test_case("DATA.CSV", FileFormat::Unsupported("CSV".to_string()))]
    #[test_case("legacy.xls", FileFormat::Unsupported("xls".to_string()))]
    #[test_case("README", FileFormat::Unsupported(String::new()))]
    fn test_from_file_name(name: &str, expected: FileFormat) {
        assert_eq!(FileFormat::from_file_name(name), expected);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_bytes("data.txt", b"a,b\n1,2\n").unwrap_err();
        assert!(matches!(err, AnonymoError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("data.txt"));
    }

    #[test]
    fn test_load_path_unsupported_does_not_read() {
        let err = load_path("/definitely/missing/data.json").unwrap_err();
        assert!(matches!(err, AnonymoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path("/definitely/missing/data.csv").unwrap_err();
        assert!(matches!(err, AnonymoError::Io(_)));
    }

    #[test]
    fn test_header_name() {
        assert_eq!(header_name("email", 2), "email");
        assert_eq!(header_name("", 2), "Unnamed: 2");
        assert_eq!(header_name("  ", 0), "Unnamed: 0");
    }

    #[test_case(&["a", "b"], &["a", "b"] ; "unique")]
    #[test_case(&["a", "a", "a"], &["a", "a.1", "a.2"] ; "repeated")]
    #[test_case(&["a", "a.1", "a"], &["a", "a.1", "a.2"] ; "suffix already taken")]
    #[test_case(&["a", "a", "a.1"], &["a", "a.1", "a.1.1"] ; "later name collides")]
    fn test_dedupe_header(input: &[&str], expected: &[&str]) {
        let header = input.iter().map(|s| s.to_string()).collect();
        assert_eq!(dedupe_header(header), expected);
    }
}
