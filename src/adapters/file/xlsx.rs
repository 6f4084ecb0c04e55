//! XLSX reader

use super::{build_table, header_name};
use crate::domain::value::parse_timestamp;
use crate::domain::{AnonymoError, CellValue, Result, Table};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// Parse the first worksheet of an XLSX workbook into a table
///
/// The first row of the used range is the header. Rows shorter than the
/// header are padded with missing values, and rows of blank cells up to the
/// sheet's declared dimension are kept as all-missing rows.
///
/// # Errors
///
/// Returns `ParseError` if the bytes are not a workbook or the workbook has no
/// worksheet.
pub fn read_xlsx(bytes: &[u8]) -> Result<Table> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;

    let sheet = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| AnonymoError::ParseError("XLSX: workbook has no worksheets".to_string()))?;

    // Blank cells are dropped from the range; only the dimension still counts them
    let declared_last_row = workbook.worksheet_cells_reader(&sheet)?.dimensions().end.0;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(AnonymoError::ParseError(
            "XLSX: no columns to parse from file".to_string(),
        ));
    };

    let header: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            Data::Empty => header_name("", index),
            other => header_name(&data_to_cell(other).canonical_string(), index),
        })
        .collect();

    let width = header.len();
    let mut body: Vec<Vec<CellValue>> = rows
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().take(width).map(data_to_cell).collect();
            cells.resize(width, CellValue::Null);
            cells
        })
        .collect();

    if let Some((first_row, _)) = range.start() {
        let declared_rows = declared_last_row.saturating_sub(first_row) as usize;
        if body.len() < declared_rows {
            body.resize(declared_rows, vec![CellValue::Null; width]);
        }
    }

    build_table(header, body)
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::Timestamp)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_timestamp(s)
            .map(CellValue::Timestamp)
            .unwrap_or_else(|| CellValue::String(s.clone())),
        Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}
