//! In-memory tabular structure
//!
//! A [`Table`] is an ordered sequence of uniquely named columns whose values
//! are aligned by row index. The constructors enforce both invariants, so any
//! `Table` value in the program is well formed.

use super::errors::AnonymoError;
use super::result::Result;
use super::value::CellValue;
use serde::Serialize;
use std::collections::HashSet;

/// A named column of cell values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    /// Create a column from a name and its values
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values in row order
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Number of cells in the column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Replace the values, keeping the name
    pub fn with_values(&self, values: Vec<CellValue>) -> Self {
        Self {
            name: self.name.clone(),
            values,
        }
    }
}

/// Rows × named columns, fully materialized in memory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns
    ///
    /// # Errors
    ///
    /// Returns [`AnonymoError::InvalidTable`] if two columns share a name or
    /// the columns have different lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(AnonymoError::InvalidTable(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(ragged) = columns.iter().find(|c| c.len() != row_count) {
            return Err(AnonymoError::InvalidTable(format!(
                "column '{}' has {} rows, expected {}",
                ragged.name(),
                ragged.len(),
                row_count
            )));
        }

        Ok(Self { columns, row_count })
    }

    /// Build a table from a header and row-major data
    ///
    /// ```
    /// use anonymo::domain::{CellValue, Table};
    ///
    /// let table = Table::from_rows(
    ///     ["id", "name"],
    ///     vec![vec![CellValue::Integer(1), CellValue::from("Alice")]],
    /// ).unwrap();
    /// assert_eq!(table.row_count(), 1);
    /// assert_eq!(table.column_names(), vec!["id", "name"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AnonymoError::InvalidTable`] if a row's width differs from
    /// the header or the header contains duplicates.
    pub fn from_rows<I, S>(column_names: I, rows: Vec<Vec<CellValue>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
        let mut buffers: Vec<Vec<CellValue>> = names
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(AnonymoError::InvalidTable(format!(
                    "row {} has {} cells, expected {}",
                    index + 1,
                    row.len(),
                    names.len()
                )));
            }
            for (buffer, value) in buffers.iter_mut().zip(row) {
                buffer.push(value);
            }
        }

        Self::new(
            names
                .into_iter()
                .zip(buffers)
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    /// A table with the given header and no rows
    pub fn empty<I, S>(column_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rows(column_names, Vec::new())
    }

    /// Column names in declared order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// All columns in declared order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Whether a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Cells of one row in column order
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.row_count).map(move |i| self.columns.iter().map(|c| &c.values[i]).collect())
    }

    /// Build a new table where the columns at `indices` have every cell passed
    /// through `f`; all other columns are cloned unchanged
    ///
    /// Shape is preserved by construction, so this cannot fail.
    pub fn map_columns<F>(&self, indices: &HashSet<usize>, mut f: F) -> Table
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        Table {
            columns: self
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    if indices.contains(&index) {
                        column.with_values(column.values.iter().map(&mut f).collect())
                    } else {
                        column.clone()
                    }
                })
                .collect(),
            row_count: self.row_count,
        }
    }

    /// Copy a contiguous row range into a new table with the same header
    pub fn slice_rows(&self, start: usize, end: usize) -> Table {
        let end = end.min(self.row_count);
        let start = start.min(end);
        Table {
            columns: self
                .columns
                .iter()
                .map(|c| c.with_values(c.values[start..end].to_vec()))
                .collect(),
            row_count: end - start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            ["id", "name", "email"],
            vec![
                vec![1i64.into(), "Alice".into(), "a@x.com".into()],
                vec![2i64.into(), "Bob".into(), CellValue::Null],
                vec![3i64.into(), "Carol".into(), "c@x.com".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = sample();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column_names(), vec!["id", "name", "email"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_row_access() {
        let table = sample();
        let row = table.row(1).unwrap();
        assert_eq!(row[1], &CellValue::from("Bob"));
        assert_eq!(row[2], &CellValue::Null);
        assert!(table.row(3).is_none());
        assert_eq!(table.rows().count(), 3);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Table::from_rows(["a", "a"], vec![]);
        assert!(matches!(result, Err(AnonymoError::InvalidTable(_))));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = Table::from_rows(["a", "b"], vec![vec![CellValue::Null]]);
        assert!(matches!(result, Err(AnonymoError::InvalidTable(_))));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Table::new(vec![
            Column::new("a", vec![CellValue::Null]),
            Column::new("b", vec![]),
        ]);
        assert!(matches!(result, Err(AnonymoError::InvalidTable(_))));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty(["a", "b"]).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_slice_rows() {
        let table = sample();
        let slice = table.slice_rows(1, 10);
        assert_eq!(slice.row_count(), 2);
        assert_eq!(slice.column_names(), table.column_names());
        assert_eq!(slice.row(0).unwrap()[0], &CellValue::Integer(2));
    }

    #[test]
    fn test_missing_count() {
        let table = sample();
        assert_eq!(table.column("email").unwrap().missing_count(), 1);
        assert_eq!(table.column("name").unwrap().missing_count(), 0);
    }
}
