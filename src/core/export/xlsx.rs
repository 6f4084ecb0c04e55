//! XLSX serializer

use crate::domain::{AnonymoError, CellValue, Result, Table};
use rust_xlsxwriter::{Format, Workbook};

/// Rows a worksheet can hold, header included
const MAX_ROWS: usize = 1_048_576;

/// Columns a worksheet can hold
const MAX_COLUMNS: usize = 16_384;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Unformatted blank cells are not written out, so blanks carry the text format
const BLANK_FORMAT: &str = "@";

/// Serialize a table as a single-sheet XLSX workbook
///
/// Row 0 holds the column names. Numbers, booleans and timestamps keep their
/// cell types; missing cells are written as blank cells so trailing empty
/// rows stay inside the sheet dimension.
///
/// # Errors
///
/// Returns an export error if the table does not fit in a worksheet or the
/// workbook cannot be written.
pub fn to_xlsx(table: &Table) -> Result<Vec<u8>> {
    if table.row_count() + 1 > MAX_ROWS || table.column_count() > MAX_COLUMNS {
        return Err(AnonymoError::Export(format!(
            "XLSX: {} rows x {} columns exceeds the worksheet limit",
            table.row_count(),
            table.column_count()
        )));
    }

    let mut workbook = Workbook::new();
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);
    let header_format = Format::new().set_bold();
    let blank_format = Format::new().set_num_format(BLANK_FORMAT);
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.column_names().into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_idx, row) in table.rows().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, cell) in row.into_iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Null => {
                    worksheet.write_blank(row_num, col, &blank_format)?;
                }
                CellValue::Number(n) if n.is_nan() => {
                    worksheet.write_blank(row_num, col, &blank_format)?;
                }
                CellValue::Number(n) if n.is_finite() => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_string(row_num, col, n.to_string())?;
                }
                CellValue::Integer(i) => {
                    worksheet.write_number(row_num, col, *i as f64)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                CellValue::Timestamp(ts) => {
                    worksheet.write_datetime_with_format(row_num, col, ts, &datetime_format)?;
                }
                CellValue::String(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
