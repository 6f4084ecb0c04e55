//! In-memory table source

use crate::adapters::database::traits::TableSource;
use crate::domain::{AnonymoError, Result, Table};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// [`TableSource`] over tables held in memory
///
/// Tables are listed in name order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    tables: BTreeMap<String, Table>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Add or replace a table
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }

    /// Add or replace a table
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    fn get(&self, table_name: &str) -> Result<&Table> {
        self.tables.get(table_name).ok_or_else(|| {
            AnonymoError::Database(format!("Table '{}' does not exist", table_name))
        })
    }
}

#[async_trait]
impl TableSource for MemorySource {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }

    async fn list_columns(&self, table_name: &str) -> Result<Vec<String>> {
        Ok(self
            .get(table_name)?
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    async fn load_table(&self, table_name: &str) -> Result<Table> {
        let table = self.get(table_name)?.clone();
        tracing::debug!(
            source = %self.name,
            table = %table_name,
            rows = table.row_count(),
            "Loaded table from memory"
        );
        Ok(table)
    }

    fn source_name(&self) -> String {
        format!("memory://{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    fn source() -> MemorySource {
        let customers = Table::from_rows(
            ["id", "email"],
            vec![vec![CellValue::Integer(1), "a@x.com".into()]],
        )
        .unwrap();
        let orders = Table::empty(["order_id", "total"]).unwrap();
        MemorySource::new("crm")
            .with_table("orders", orders)
            .with_table("customers", customers)
    }

    #[tokio::test]
    async fn test_list_tables_sorted() {
        let tables = source().list_tables().await.unwrap();
        assert_eq!(tables, vec!["customers", "orders"]);
    }

    #[tokio::test]
    async fn test_list_columns_in_order() {
        let columns = source().list_columns("orders").await.unwrap();
        assert_eq!(columns, vec!["order_id", "total"]);
    }

    #[tokio::test]
    async fn test_load_table_returns_copy() {
        let table = source().load_table("customers").await.unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_names(), vec!["id", "email"]);
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let err = source().load_table("missing").await.unwrap_err();
        assert!(matches!(err, AnonymoError::Database(_)));
    }
}
