//! Workflow session
//!
//! A [`Session`] holds the state of one anonymization workflow: the table
//! that was loaded and the table produced from it. Loading a new table
//! discards both.

use crate::anonymization::{AnonymizationEngine, AnonymizationMethod, AnonymizationReport};
use crate::core::export::{export_selected, ExportArtifact, ExportFormats};
use crate::core::preview::{Page, Paginator};
use crate::domain::{AnonymoError, Result, Table};

/// State of one load → anonymize → preview → export workflow
#[derive(Debug, Default)]
pub struct Session {
    engine: AnonymizationEngine,
    source_label: Option<String>,
    source: Option<Table>,
    anonymized: Option<Table>,
    report: Option<AnonymizationReport>,
}

impl Session {
    /// Create a session using `engine` for every anonymization
    pub fn new(engine: AnonymizationEngine) -> Self {
        Self {
            engine,
            ..Default::default()
        }
    }

    /// Replace the loaded table, discarding any previous result
    pub fn load(&mut self, label: impl Into<String>, table: Table) {
        let label = label.into();
        tracing::debug!(
            source = %label,
            rows = table.row_count(),
            columns = table.column_count(),
            "Session loaded table"
        );
        self.source_label = Some(label);
        self.source = Some(table);
        self.anonymized = None;
        self.report = None;
    }

    /// Forget everything
    pub fn reset(&mut self) {
        self.source_label = None;
        self.source = None;
        self.anonymized = None;
        self.report = None;
    }

    /// Label of the loaded table (file or table name)
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// The loaded table
    pub fn source(&self) -> Option<&Table> {
        self.source.as_ref()
    }

    /// The anonymized table, if anonymization has run
    pub fn anonymized(&self) -> Option<&Table> {
        self.anonymized.as_ref()
    }

    /// Report of the last anonymization
    pub fn report(&self) -> Option<&AnonymizationReport> {
        self.report.as_ref()
    }

    /// The table to show: the anonymized one if present, else the source
    pub fn current(&self) -> Option<&Table> {
        self.anonymized.as_ref().or(self.source.as_ref())
    }

    /// Anonymize the loaded table
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` when nothing is loaded.
    pub fn anonymize<S: AsRef<str>>(
        &mut self,
        column_names: &[S],
        method: AnonymizationMethod,
    ) -> Result<&AnonymizationReport> {
        let source = self.source.as_ref().ok_or_else(no_table)?;
        let (table, report) = self.engine.run(source, column_names, method);
        self.anonymized = Some(table);
        Ok(self.report.insert(report))
    }

    /// Anonymize with the method given by its identifier
    ///
    /// An unknown identifier leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMethod` for an unknown identifier and
    /// `InvalidTable` when nothing is loaded.
    pub fn anonymize_named<S: AsRef<str>>(
        &mut self,
        column_names: &[S],
        method_name: &str,
    ) -> Result<&AnonymizationReport> {
        let method: AnonymizationMethod = method_name.parse()?;
        self.anonymize(column_names, method)
    }

    /// One page of the current table
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` when nothing is loaded, or a pagination error.
    pub fn preview(&self, page_size: usize, page_number: usize) -> Result<Page<'_>> {
        let table = self.current().ok_or_else(no_table)?;
        Paginator::new(table, page_size)?.page(page_number)
    }

    /// Export artifacts of the anonymized table
    ///
    /// # Errors
    ///
    /// Returns an export error when nothing has been anonymized yet.
    pub fn export(&self, formats: ExportFormats) -> Result<Vec<ExportArtifact>> {
        let table = self.anonymized.as_ref().ok_or_else(|| {
            AnonymoError::Export("nothing has been anonymized yet".to_string())
        })?;
        export_selected(table, formats)
    }
}

fn no_table() -> AnonymoError {
    AnonymoError::InvalidTable("no table loaded".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    fn people() -> Table {
        Table::from_rows(
            ["id", "name", "email"],
            vec![
                vec![CellValue::Integer(1), "Alice".into(), "a@x.com".into()],
                vec![CellValue::Integer(2), "Bob".into(), CellValue::Null],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_workflow() {
        let mut session = Session::default();
        session.load("people.csv", people());

        let report = session.anonymize(&["email"], AnonymizationMethod::Mask).unwrap();
        assert_eq!(report.total_transformed(), 1);
        assert_eq!(report.total_missing(), 1);

        let page = session.preview(1, 1).unwrap();
        let row: Vec<_> = page.rows().next().unwrap();
        assert_eq!(row[2], &CellValue::from("****"));

        let artifacts = session.export(ExportFormats::default()).unwrap();
        assert_eq!(artifacts.len(), 2);
    }

    #[test]
    fn test_new_load_resets_result() {
        let mut session = Session::default();
        session.load("a.csv", people());
        session.anonymize(&["name"], AnonymizationMethod::Hash).unwrap();
        assert!(session.anonymized().is_some());

        session.load("b.csv", people());
        assert!(session.anonymized().is_none());
        assert!(session.report().is_none());
        assert_eq!(session.source_label(), Some("b.csv"));
        assert_eq!(session.current(), session.source());
    }

    #[test]
    fn test_unknown_method_keeps_state() {
        let mut session = Session::default();
        session.load("a.csv", people());

        let err = session.anonymize_named(&["name"], "Scramble").unwrap_err();
        assert_eq!(err, AnonymoError::UnsupportedMethod("Scramble".to_string()));
        assert!(session.anonymized().is_none());
        assert_eq!(session.current(), Some(&people()));
    }

    #[test]
    fn test_nothing_loaded() {
        let mut session = Session::default();
        assert!(session.preview(10, 1).is_err());
        assert!(session.anonymize(&["x"], AnonymizationMethod::Mask).is_err());
        assert!(matches!(
            session.export(ExportFormats::default()),
            Err(AnonymoError::Export(_))
        ));
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        session.load("a.csv", people());
        session.reset();
        assert!(session.source().is_none());
        assert!(session.source_label().is_none());
    }
}
