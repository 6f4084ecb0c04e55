//! CSV serializer

use crate::domain::{AnonymoError, Result, Table};
use ::csv::Writer;

/// Serialize a table as CSV
///
/// The header row holds the column names; cells are written with their
/// canonical string form and missing cells as empty fields.
///
/// # Errors
///
/// Returns an export error if the writer fails.
pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record(table.column_names())
        .map_err(|e| AnonymoError::Export(format!("CSV: {e}")))?;

    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| {
                if cell.is_missing() {
                    String::new()
                } else {
                    cell.canonical_string()
                }
            }))
            .map_err(|e| AnonymoError::Export(format!("CSV: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AnonymoError::Export(format!("CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;
    use chrono::NaiveDate;

    #[test]
    fn test_to_csv() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let table = Table::from_rows(
            ["id", "name", "score", "active", "seen"],
            vec![
                vec![
                    CellValue::Integer(1),
                    "Doe, Jane".into(),
                    CellValue::Number(2.0),
                    CellValue::Boolean(true),
                    CellValue::Timestamp(ts),
                ],
                vec![
                    CellValue::Integer(2),
                    CellValue::Null,
                    CellValue::Number(f64::NAN),
                    CellValue::Boolean(false),
                    CellValue::Null,
                ],
            ],
        )
        .unwrap();

        let text = String::from_utf8(to_csv(&table).unwrap()).unwrap();
        assert_eq!(
            text,
            "id,name,score,active,seen\n\
             1,\"Doe, Jane\",2.0,True,2024-01-02 03:04:05\n\
             2,,,False,\n"
        );
    }

    #[test]
    fn test_header_only() {
        let table = Table::empty(["a", "b"]).unwrap();
        assert_eq!(to_csv(&table).unwrap(), b"a,b\n");
    }
}
