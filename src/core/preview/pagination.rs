//! Pagination over borrowed tables

use crate::domain::{AnonymoError, CellValue, Result, Table};
use std::ops::Range;

/// Number of pages needed to show `row_count` rows
///
/// An empty table has zero pages.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// Fetch one page of `table`
///
/// # Errors
///
/// Returns `InvalidPageSize` when `page_size` is zero and `PageOutOfRange`
/// when `page_number` is not in `1..=total_pages`.
///
/// # Examples
///
/// ```
/// use anonymo::core::preview::page;
/// use anonymo::domain::{CellValue, Table};
///
/// let rows = (0..25).map(|i| vec![CellValue::Integer(i)]).collect();
/// let table = Table::from_rows(["n"], rows).unwrap();
///
/// let third = page(&table, 10, 3).unwrap();
/// assert_eq!(third.row_range(), 20..25);
/// assert!(page(&table, 10, 4).is_err());
/// ```
pub fn page(table: &Table, page_size: usize, page_number: usize) -> Result<Page<'_>> {
    Paginator::new(table, page_size)?.page(page_number)
}

/// Splits a borrowed table into fixed-size pages
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    table: &'a Table,
    page_size: usize,
}

impl<'a> Paginator<'a> {
    /// Create a paginator
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageSize` when `page_size` is zero.
    pub fn new(table: &'a Table, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(AnonymoError::InvalidPageSize);
        }
        Ok(Self { table, page_size })
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages
    pub fn total_pages(&self) -> usize {
        total_pages(self.table.row_count(), self.page_size)
    }

    /// Page `number` (1-based)
    ///
    /// # Errors
    ///
    /// Returns `PageOutOfRange` when `number` is not in `1..=total_pages`.
    pub fn page(&self, number: usize) -> Result<Page<'a>> {
        let total = self.total_pages();
        if number == 0 || number > total {
            return Err(AnonymoError::PageOutOfRange {
                requested: number,
                total,
            });
        }
        Ok(self.build(number, total))
    }

    /// All pages in order
    ///
    /// Each call starts again from page 1.
    pub fn pages(&self) -> impl Iterator<Item = Page<'a>> {
        let this = *self;
        let total = this.total_pages();
        (1..=total).map(move |number| this.build(number, total))
    }

    fn build(&self, number: usize, total: usize) -> Page<'a> {
        let start = (number - 1) * self.page_size;
        let end = (start + self.page_size).min(self.table.row_count());
        Page {
            table: self.table,
            number,
            total_pages: total,
            start,
            end,
        }
    }
}

/// A read-only view of a contiguous row range
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    table: &'a Table,
    number: usize,
    total_pages: usize,
    start: usize,
    end: usize,
}

impl<'a> Page<'a> {
    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Number of pages in the table
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Table row indices covered by this page
    pub fn row_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of rows on this page
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the page has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this is the last page
    pub fn is_last(&self) -> bool {
        self.number == self.total_pages
    }

    /// Column names of the viewed table
    pub fn column_names(&self) -> Vec<&'a str> {
        self.table.column_names()
    }

    /// Rows of the page in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&'a CellValue>> + 'a {
        let table = self.table;
        self.row_range().filter_map(move |index| table.row(index))
    }

    /// Copy the page into an owned table
    pub fn to_table(&self) -> Table {
        self.table.slice_rows(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn numbers(n: i64) -> Table {
        let rows = (0..n).map(|i| vec![CellValue::Integer(i)]).collect();
        Table::from_rows(["n"], rows).unwrap()
    }

    #[test_case(0, 10, 0)]
    #[test_case(1, 10, 1)]
    #[test_case(10, 10, 1)]
    #[test_case(11, 10, 2)]
    #[test_case(25, 10, 3)]
    #[test_case(5, 1, 5)]
    fn test_total_pages(rows: usize, size: usize, expected: usize) {
        assert_eq!(total_pages(rows, size), expected);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let table = numbers(25);
        let last = page(&table, 10, 3).unwrap();
        assert_eq!(last.len(), 5);
        assert!(last.is_last());
        let first: Vec<_> = last.rows().map(|row| row[0].clone()).collect();
        assert_eq!(first[0], CellValue::Integer(20));
    }

    #[test]
    fn test_full_last_page() {
        let table = numbers(20);
        assert_eq!(page(&table, 10, 2).unwrap().len(), 10);
    }

    #[test]
    fn test_page_out_of_range() {
        let table = numbers(25);
        let err = page(&table, 10, 5).unwrap_err();
        assert_eq!(
            err,
            AnonymoError::PageOutOfRange {
                requested: 5,
                total: 3
            }
        );
        assert!(page(&table, 10, 0).is_err());
    }

    #[test]
    fn test_zero_page_size() {
        let table = numbers(3);
        assert_eq!(page(&table, 0, 1).unwrap_err(), AnonymoError::InvalidPageSize);
    }

    #[test]
    fn test_empty_table_has_no_pages() {
        let table = Table::empty(["a"]).unwrap();
        let paginator = Paginator::new(&table, 10).unwrap();
        assert_eq!(paginator.total_pages(), 0);
        assert_eq!(paginator.pages().count(), 0);
        assert!(matches!(
            paginator.page(1),
            Err(AnonymoError::PageOutOfRange { requested: 1, total: 0 })
        ));
    }

    #[test]
    fn test_pages_restart_and_random_access() {
        let table = numbers(7);
        let paginator = Paginator::new(&table, 3).unwrap();

        let first_pass: Vec<_> = paginator.pages().map(|p| p.row_range()).collect();
        let second_pass: Vec<_> = paginator.pages().map(|p| p.row_range()).collect();
        assert_eq!(first_pass, vec![0..3, 3..6, 6..7]);
        assert_eq!(first_pass, second_pass);

        let again = paginator.page(2).unwrap().to_table();
        assert_eq!(again, paginator.page(2).unwrap().to_table());
        assert_eq!(again.row_count(), 3);
    }
}
