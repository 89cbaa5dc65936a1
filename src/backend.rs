//! Backend trait abstracting the generic connection layer.
//!
//! The adapter never talks to the wire itself. It needs a catalog query
//! primitive, a statement executor, a column enumerator, and the generic
//! (non-spatial) DDL and condition paths to fall back on. Anything speaking
//! Postgres can implement this.

use crate::error::Result;
use crate::schema::statement;
use crate::value::SqlValue;

/// One column as reported by the generic column enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// SQL-visible type text.
    pub sql_type: String,
    /// Default value expression, if any.
    pub default: Option<String>,
    /// Whether the column rejects NULL.
    pub not_null: bool,
}

/// Primitives supplied by the generic schema layer.
///
/// The default methods are the generic fallback paths; implementors with
/// their own DDL helpers can override them.
#[allow(async_fn_in_trait)]
pub trait SchemaBackend {
    /// Run a catalog query and return its rows as text.
    async fn query_rows(&mut self, sql: &str) -> Result<Vec<Vec<String>>>;

    /// Execute a DDL/DML statement, discarding any result.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Enumerate the columns of a table.
    async fn column_definitions(&mut self, table: &str) -> Result<Vec<ColumnDefinition>>;

    /// Generic (non-spatial) column add.
    async fn add_plain_column(
        &mut self,
        table: &str,
        column: &str,
        type_text: &str,
        not_null: bool,
    ) -> Result<()> {
        let mut sql = format!("ALTER TABLE {table} ADD COLUMN {column} {type_text}");
        if not_null {
            sql.push_str(" NOT NULL");
        }
        self.execute(&sql).await
    }

    /// Generic (non-spatial) column removal.
    async fn remove_plain_column(&mut self, table: &str, column: &str) -> Result<()> {
        self.execute(&format!("ALTER TABLE {table} DROP COLUMN {column}"))
            .await
    }

    /// Generic (non-spatial) index creation, honoring uniqueness.
    async fn add_plain_index(
        &mut self,
        index_name: &str,
        table: &str,
        columns: &[String],
        unique: bool,
    ) -> Result<()> {
        self.execute(&statement::plain_index_sql(index_name, table, columns, unique))
            .await
    }

    /// Generic condition fragment for a non-spatial attribute.
    ///
    /// Binds use `?` placeholders; NULL compares with `IS NULL` and binds
    /// nothing.
    fn plain_condition(&self, table: &str, attribute: &str, value: &SqlValue) -> String {
        match value {
            SqlValue::Null => format!("{table}.\"{attribute}\" IS NULL"),
            _ => format!("{table}.\"{attribute}\" = ?"),
        }
    }
}
