//! CSV reader

use super::{build_table, header_name};
use crate::domain::{AnonymoError, CellValue, Result, Table};
use ::csv::ReaderBuilder;

/// Parse CSV bytes into a table
///
/// The first record is the header. Cell types are inferred per cell with
/// [`CellValue::infer`]. Rows shorter than the header are padded with missing
/// values and repeated header names get `.1`, `.2` suffixes.
///
/// # Errors
///
/// Returns `ParseError` for empty input, rows wider than the header or
/// invalid UTF-8.
pub fn read_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(AnonymoError::ParseError(
            "CSV: no columns to parse from file".to_string(),
        ));
    }

    let header: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(index, name)| header_name(name, index))
        .collect();

    let width = header.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(AnonymoError::ParseError(format!(
                "CSV: expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            )));
        }
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::infer).collect();
        cells.resize(width, CellValue::Null);
        rows.push(cells);
    }

    build_table(header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_typed_cells() {
        let table = read_csv(b"id,name,score,active\n1,Alice,9.5,true\n2,,NaN,False\n").unwrap();
        assert_eq!(table.column_names(), vec!["id", "name", "score", "active"]);
        assert_eq!(table.row_count(), 2);

        let first = table.row(0).unwrap();
        assert_eq!(first[0], &CellValue::Integer(1));
        assert_eq!(first[1], &CellValue::from("Alice"));
        assert_eq!(first[2], &CellValue::Number(9.5));
        assert_eq!(first[3], &CellValue::Boolean(true));

        let second = table.row(1).unwrap();
        assert_eq!(second[1], &CellValue::Null);
        assert_eq!(second[2], &CellValue::Null);
        assert_eq!(second[3], &CellValue::Boolean(false));
    }

    #[test]
    fn test_quoted_fields() {
        let table = read_csv(b"name,address\n\"Doe, Jane\",\"1 Main St\"\n").unwrap();
        assert_eq!(table.row(0).unwrap()[0], &CellValue::from("Doe, Jane"));
    }

    #[test]
    fn test_header_only() {
        let table = read_csv(b"id,email\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_blank_header_named_by_position() {
        let table = read_csv(b"id,\n1,x\n").unwrap();
        assert_eq!(table.column_names(), vec!["id", "Unnamed: 1"]);
    }

    #[test]
    fn test_empty_input() {
        let err = read_csv(b"").unwrap_err();
        assert!(matches!(err, AnonymoError::ParseError(_)));
    }

    #[test]
    fn test_short_row_padded() {
        let table = read_csv(b"a,b\n1,2\n3\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(1).unwrap(), vec![&CellValue::Integer(3), &CellValue::Null]);
    }

    #[test]
    fn test_long_row_rejected() {
        let err = read_csv(b"a,b\n1,2\n3,4,5\n").unwrap_err();
        assert!(matches!(err, AnonymoError::ParseError(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_duplicate_header_renamed() {
        let table = read_csv(b"a,a,a\n1,2,3\n").unwrap();
        assert_eq!(table.column_names(), vec!["a", "a.1", "a.2"]);
        assert_eq!(table.row(0).unwrap()[1], &CellValue::Integer(2));
    }
}
