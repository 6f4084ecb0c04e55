//! Export of anonymized tables
//!
//! A table is serialized into two downloadable artifacts built from the same
//! data:
//!
//! - `anonymized_data.csv` (`text/csv`)
//! - `anonymized_data.xlsx` (Office Open XML spreadsheet)

pub mod csv;
pub mod xlsx;

use crate::domain::{AnonymoError, Result, Table};
use std::path::{Path, PathBuf};

pub use self::csv::to_csv;
pub use self::xlsx::to_xlsx;

/// File name of the CSV artifact
pub const CSV_FILE_NAME: &str = "anonymized_data.csv";

/// MIME type of the CSV artifact
pub const CSV_MIME_TYPE: &str = "text/csv";

/// File name of the XLSX artifact
pub const XLSX_FILE_NAME: &str = "anonymized_data.xlsx";

/// MIME type of the XLSX artifact
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serialized table ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name
    pub file_name: &'static str,
    /// MIME type of `bytes`
    pub mime_type: &'static str,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// CSV artifact for `table`
    ///
    /// # Errors
    ///
    /// Returns an export error if serialization fails.
    pub fn csv(table: &Table) -> Result<Self> {
        Ok(Self {
            file_name: CSV_FILE_NAME,
            mime_type: CSV_MIME_TYPE,
            bytes: to_csv(table)?,
        })
    }

    /// XLSX artifact for `table`
    ///
    /// # Errors
    ///
    /// Returns an export error if serialization fails.
    pub fn xlsx(table: &Table) -> Result<Self> {
        Ok(Self {
            file_name: XLSX_FILE_NAME,
            mime_type: XLSX_MIME_TYPE,
            bytes: to_xlsx(table)?,
        })
    }
}

/// Which artifacts to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormats {
    /// Produce the CSV artifact
    pub csv: bool,
    /// Produce the XLSX artifact
    pub xlsx: bool,
}

impl Default for ExportFormats {
    fn default() -> Self {
        Self {
            csv: true,
            xlsx: true,
        }
    }
}

/// Serialize `table` into both artifacts, CSV first
///
/// # Errors
///
/// Returns an export error if either serialization fails.
pub fn export_artifacts(table: &Table) -> Result<Vec<ExportArtifact>> {
    export_selected(table, ExportFormats::default())
}

/// Serialize `table` into the selected artifacts, CSV first
///
/// # Errors
///
/// Returns an export error if a serialization fails.
pub fn export_selected(table: &Table, formats: ExportFormats) -> Result<Vec<ExportArtifact>> {
    let mut artifacts = Vec::with_capacity(2);
    if formats.csv {
        artifacts.push(ExportArtifact::csv(table)?);
    }
    if formats.xlsx {
        artifacts.push(ExportArtifact::xlsx(table)?);
    }
    Ok(artifacts)
}

/// Write artifacts into `dir`, creating it if needed
///
/// Existing files with the same names are replaced.
///
/// # Errors
///
/// Returns an I/O error if the directory or a file cannot be written.
pub fn write_artifacts(dir: impl AsRef<Path>, artifacts: &[ExportArtifact]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        AnonymoError::Io(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(artifact.file_name);
        std::fs::write(&path, &artifact.bytes).map_err(|e| {
            AnonymoError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            mime_type = artifact.mime_type,
            bytes = artifact.bytes.len(),
            "Wrote export artifact"
        );
        written.push(path);
    }

    Ok(written)
}
