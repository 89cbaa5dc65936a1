//! Spatial-aware schema operations over a generic backend.
//!
//! `SpatialConnection` decorates a [`SchemaBackend`] rather than replacing
//! it: non-spatial columns, indexes, and conditions route through the
//! backend's own generic paths, while geometry columns take the PostGIS
//! procedures and operators.

use log::debug;

use crate::backend::SchemaBackend;
use crate::error::{Error, Result};
use crate::predicate;
use crate::schema::index::{group_index_rows, index_query_sql, IndexDefinition, IndexRow};
use crate::schema::statement;
use crate::schema::table::{ColumnOptions, TableDefinition};
use crate::spatial::column::Column;
use crate::spatial::constraints;
use crate::spatial::descriptor::GeometryDescriptor;
use crate::spatial::kind::GeometryKind;
use crate::value::{BindValue, ConditionValue};

/// Tables maintained by the extension itself; schema dumps and migrations
/// should leave them alone.
pub const MIGRATION_IGNORED_TABLES: [&str; 2] = ["spatial_ref_sys", "geometry_columns"];

/// Options for `create_table`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateTableOptions {
    /// Drop any same-named table first, ignoring failure.
    pub force: bool,
}

/// Options for `add_index`.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Explicit index name; derived from table and columns when absent.
    pub name: Option<String>,
    /// Uniqueness; ignored for spatial indexes.
    pub unique: bool,
    /// Create a GiST spatial index instead of a plain one.
    pub spatial: bool,
}

/// A spatial-aware view of one database connection.
///
/// Stateless across calls: every operation is a function of its inputs plus
/// at most one catalog query or statement execution on the backend.
pub struct SpatialConnection<B: SchemaBackend> {
    backend: B,
}

impl<B: SchemaBackend> SpatialConnection<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the wrapped backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwrap into the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Introspect the columns of a table.
    ///
    /// Spatial metadata is reconstructed from the table's check constraints
    /// on every call; nothing is cached. A column counts as spatial when its
    /// reported type is a geometry type and at least one constraint idiom
    /// matched it; a geometry-typed column with no matching constraints at
    /// all falls back to the plain path.
    pub async fn columns(&mut self, table: &str) -> Result<Vec<Column>> {
        let constraint_rows = self
            .backend
            .query_rows(&constraints::constraint_query_sql(table))
            .await?;
        let definitions = constraint_rows
            .iter()
            .filter_map(|row| row.first())
            .map(String::as_str);
        let mut spatial_info = constraints::column_spatial_info(definitions);

        let column_defs = self.backend.column_definitions(table).await?;
        Ok(column_defs
            .into_iter()
            .map(|def| {
                let looks_spatial = def.sql_type.to_ascii_lowercase().contains("geometry");
                match spatial_info.remove(&def.name) {
                    Some(descriptor) if looks_spatial => Column::spatial(
                        def.name,
                        def.sql_type,
                        def.default,
                        def.not_null,
                        descriptor,
                    ),
                    _ => Column::plain(def.name, def.sql_type, def.default, def.not_null),
                }
            })
            .collect())
    }

    /// Introspect the indexes of a table, excluding primary keys.
    pub async fn indexes(&mut self, table: &str) -> Result<Vec<IndexDefinition>> {
        let rows = self.backend.query_rows(&index_query_sql(table)).await?;
        let parsed: Vec<IndexRow> = rows
            .iter()
            .filter_map(|row| IndexRow::from_text_row(row))
            .collect();
        Ok(group_index_rows(table, &parsed))
    }

    /// Add a column. Geometry type names route through `AddGeometryColumn`;
    /// everything else goes to the generic path.
    pub async fn add_column(
        &mut self,
        table: &str,
        column: &str,
        type_text: &str,
        options: ColumnOptions,
    ) -> Result<()> {
        if let Some(kind) = GeometryKind::from_sql_name(type_text) {
            let mut descriptor = GeometryDescriptor::new(kind).with_srid(options.srid);
            if options.with_z {
                descriptor = descriptor.with_z();
            }
            if options.with_m {
                descriptor = descriptor.with_m();
            }
            self.add_geometry_column(table, column, &descriptor, options.not_null)
                .await
        } else {
            self.backend
                .add_plain_column(table, column, type_text, options.not_null)
                .await
        }
    }

    /// Register a geometry column, then enforce NOT NULL when requested.
    pub async fn add_geometry_column(
        &mut self,
        table: &str,
        column: &str,
        descriptor: &GeometryDescriptor,
        not_null: bool,
    ) -> Result<()> {
        for sql in statement::add_geometry_column_sql(table, column, descriptor, not_null) {
            debug!("add_geometry_column: {sql}");
            self.backend.execute(&sql).await?;
        }
        Ok(())
    }

    /// Remove a column, routing geometry columns through
    /// `DropGeometryColumn` so the extension's bookkeeping stays consistent.
    pub async fn remove_column(&mut self, table: &str, column: &str) -> Result<()> {
        let columns = self.columns(table).await?;
        let found = columns
            .iter()
            .find(|c| c.name == column)
            .ok_or_else(|| Error::ColumnNotFound {
                table: table.to_string(),
                name: column.to_string(),
            })?;

        if found.is_spatial() || GeometryKind::is_spatial_type(&found.sql_type) {
            let sql = statement::drop_geometry_column_sql(table, column);
            debug!("remove_column (spatial): {sql}");
            self.backend.execute(&sql).await
        } else {
            self.backend.remove_plain_column(table, column).await
        }
    }

    /// Create a table, then register its deferred geometry columns in
    /// declaration order.
    ///
    /// With `force`, a prior `DROP TABLE` runs and its failure is swallowed
    /// (the table usually does not exist). A failure among the deferred adds
    /// surfaces immediately and leaves the table partially configured.
    pub async fn create_table(
        &mut self,
        table: &str,
        definition: &TableDefinition,
        options: CreateTableOptions,
    ) -> Result<()> {
        if options.force {
            if let Err(err) = self.backend.execute(&statement::drop_table_sql(table)).await {
                debug!("force create_table {table}: ignoring drop failure: {err}");
            }
        }

        self.backend
            .execute(&statement::create_table_sql(table, &definition.body_sql()))
            .await?;

        for spatial in definition.spatial_columns() {
            self.add_geometry_column(table, &spatial.name, &spatial.descriptor, spatial.not_null)
                .await?;
        }
        Ok(())
    }

    /// Create an index. With `spatial`, the index is always GiST and any
    /// uniqueness request is ignored; otherwise the generic path runs.
    pub async fn add_index(
        &mut self,
        table: &str,
        columns: &[String],
        options: IndexOptions,
    ) -> Result<()> {
        let index_name = options
            .name
            .unwrap_or_else(|| derived_index_name(table, columns, options.spatial));

        if options.spatial {
            if options.unique {
                debug!("add_index {index_name}: ignoring uniqueness on a spatial index");
            }
            let sql = statement::spatial_index_sql(&index_name, table, columns);
            self.backend.execute(&sql).await
        } else {
            self.backend
                .add_plain_index(&index_name, table, columns, options.unique)
                .await
        }
    }

    /// Build the condition fragment and binds for attribute/value pairs,
    /// joined with ` AND ` in attribute order, given already-introspected
    /// column metadata.
    pub fn build_conditions(
        &self,
        table: &str,
        pairs: &[(&str, ConditionValue)],
        columns: &[Column],
    ) -> Result<(String, Vec<BindValue>)> {
        predicate::build_conditions(table, pairs, columns, |t, a, v| {
            self.backend.plain_condition(t, a, v)
        })
    }

    /// Introspect the table, then build conditions against the fresh
    /// metadata.
    pub async fn find_conditions(
        &mut self,
        table: &str,
        pairs: &[(&str, ConditionValue)],
    ) -> Result<(String, Vec<BindValue>)> {
        let columns = self.columns(table).await?;
        self.build_conditions(table, pairs, &columns)
    }
}

fn derived_index_name(table: &str, columns: &[String], spatial: bool) -> String {
    if spatial {
        format!("{table}_{}_spatial_index", columns.join("_"))
    } else {
        format!("index_{table}_on_{}", columns.join("_and_"))
    }
}
