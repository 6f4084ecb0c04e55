//! PostgreSQL adapter implementing the table source trait

use crate::adapters::database::traits::TableSource;
use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::postgresql::models::{qualified_name, PgColumnType};
use crate::domain::{AnonymoError, Column, Result, Table};
use async_trait::async_trait;

/// Schema that tables are listed from and loaded from
const SCHEMA: &str = "public";

const LIST_TABLES: &str = r#"
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema::text = $1 AND table_type = 'BASE TABLE'
    ORDER BY table_name
"#;

const LIST_COLUMNS: &str = r#"
    SELECT column_name::text, data_type::text
    FROM information_schema.columns
    WHERE table_schema::text = $1 AND table_name::text = $2
    ORDER BY ordinal_position
"#;

/// PostgreSQL implementation of [`TableSource`]
///
/// Reads tables of the `public` schema.
pub struct PostgresSource {
    client: PostgresClient,
    url: String,
}

impl PostgresSource {
    /// Create a new PostgreSQL source
    ///
    /// `redacted_url` is only used to describe the source in logs.
    pub fn new(client: PostgresClient, redacted_url: String) -> Self {
        Self {
            client,
            url: redacted_url,
        }
    }

    /// Column names and type families in ordinal order
    async fn describe(&self, table_name: &str) -> Result<Vec<(String, PgColumnType)>> {
        let rows = self.client.query(LIST_COLUMNS, &[&SCHEMA, &table_name]).await?;

        if rows.is_empty() {
            return Err(AnonymoError::Database(format!(
                "Table '{}' does not exist",
                table_name
            )));
        }

        Ok(rows
            .iter()
            .map(|row| {
                let name: String = row.get(0);
                let data_type: String = row.get(1);
                (name, PgColumnType::from_data_type(&data_type))
            })
            .collect())
    }
}

/// Schema-qualified so the rows come from the table `describe` reported on,
/// whatever the session's `search_path`
fn select_all(table_name: &str) -> String {
    format!("SELECT * FROM {}", qualified_name(SCHEMA, table_name))
}

#[async_trait]
impl TableSource for PostgresSource {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let rows = self.client.query(LIST_TABLES, &[&SCHEMA]).await?;
        Ok(rows.iter().map(|row| row.get::<_, String>(0)).collect())
    }

    async fn list_columns(&self, table_name: &str) -> Result<Vec<String>> {
        Ok(self
            .describe(table_name)
            .await?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    async fn load_table(&self, table_name: &str) -> Result<Table> {
        let schema = self.describe(table_name).await?;
        let rows = self.client.simple_query(&select_all(table_name)).await?;

        let mut values: Vec<Vec<_>> = schema
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for row in &rows {
            for (index, (_, column_type)) in schema.iter().enumerate() {
                let text = row.try_get(index).map_err(|e| {
                    AnonymoError::Database(format!("Failed to read column {}: {}", index, e))
                })?;
                values[index].push(column_type.to_cell(text));
            }
        }

        let columns = schema
            .into_iter()
            .zip(values)
            .map(|((name, _), cells)| Column::new(name, cells))
            .collect();
        let table = Table::new(columns)?;

        tracing::info!(
            table = %table_name,
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded table from PostgreSQL"
        );

        Ok(table)
    }

    fn source_name(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_is_schema_qualified() {
        assert_eq!(select_all("users"), r#"SELECT * FROM "public"."users""#);
        assert_eq!(
            select_all("odd\"name"),
            r#"SELECT * FROM "public"."odd""name""#
        );
    }
}
