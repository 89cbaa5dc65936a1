//! DDL text generation for spatial columns and indexes.
//!
//! Geometry columns are never added with a plain `ALTER TABLE ... ADD`:
//! PostGIS tracks them in its own side tables, so creation goes through
//! `AddGeometryColumn` and removal through `DropGeometryColumn`.

use crate::spatial::descriptor::GeometryDescriptor;

/// Operator class used for spatial indexes.
pub const SPATIAL_INDEX_OPCLASS: &str = "GIST_GEOMETRY_OPS";

/// Statements registering a geometry column, in execution order.
///
/// The `AddGeometryColumn` call always runs first; the `SET NOT NULL`
/// alter follows only when requested.
pub fn add_geometry_column_sql(
    table: &str,
    column: &str,
    descriptor: &GeometryDescriptor,
    not_null: bool,
) -> Vec<String> {
    let mut statements = vec![format!(
        "SELECT AddGeometryColumn('{table}','{column}',{},'{}',{})",
        descriptor.srid,
        descriptor.type_sql(),
        descriptor.dimension()
    )];
    if not_null {
        statements.push(format!(
            "ALTER TABLE {table} ALTER {column} SET NOT NULL"
        ));
    }
    statements
}

/// Statement removing a geometry column through the extension's procedure.
pub fn drop_geometry_column_sql(table: &str, column: &str) -> String {
    format!("SELECT DropGeometryColumn('{table}','{column}')")
}

/// Default name for a spatial index on one column.
pub fn derived_spatial_index_name(table: &str, column: &str) -> String {
    format!("{table}_{column}_spatial_index")
}

/// GiST index over the listed columns. Spatial indexes are never unique.
pub fn spatial_index_sql(index_name: &str, table: &str, columns: &[String]) -> String {
    format!(
        "CREATE INDEX {index_name} ON {table} USING GIST ({} {SPATIAL_INDEX_OPCLASS})",
        columns.join(", ")
    )
}

/// Plain B-tree index, honoring uniqueness.
pub fn plain_index_sql(index_name: &str, table: &str, columns: &[String], unique: bool) -> String {
    let index_type = if unique { "UNIQUE " } else { "" };
    format!(
        "CREATE {index_type}INDEX {index_name} ON {table} ({})",
        columns.join(", ")
    )
}

/// `CREATE TABLE` over the inline (non-spatial) column body.
pub fn create_table_sql(table: &str, body: &str) -> String {
    format!("CREATE TABLE {table} ({body})")
}

/// Best-effort drop used by force-create.
pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE {table}")
}
