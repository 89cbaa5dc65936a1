//! Table definition builder that defers geometry columns.
//!
//! Column declarations are partitioned at definition time: recognized
//! geometry type names become deferred spatial columns registered after the
//! table exists, everything else renders inline in the `CREATE TABLE` body
//! in declaration order.

use crate::spatial::descriptor::{GeometryDescriptor, UNSPECIFIED_SRID};
use crate::spatial::kind::GeometryKind;

/// Options for one column declaration.
#[derive(Debug, Clone)]
pub struct ColumnOptions {
    /// Reject NULL values.
    pub not_null: bool,
    /// Default value expression (plain columns only).
    pub default: Option<String>,
    /// Spatial reference id (geometry columns only).
    pub srid: i32,
    /// Z coordinate (geometry columns only).
    pub with_z: bool,
    /// M coordinate (geometry columns only).
    pub with_m: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            not_null: false,
            default: None,
            srid: UNSPECIFIED_SRID,
            with_z: false,
            with_m: false,
        }
    }
}

/// A geometry column whose creation is deferred until after `CREATE TABLE`.
#[derive(Debug, Clone)]
pub struct SpatialColumnDef {
    pub name: String,
    pub descriptor: GeometryDescriptor,
    pub not_null: bool,
}

/// Accumulates column declarations for `create_table`.
#[derive(Debug, Clone, Default)]
pub struct TableDefinition {
    plain_columns: Vec<String>,
    spatial_columns: Vec<SpatialColumnDef>,
}

impl TableDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column with default options.
    pub fn column(&mut self, name: &str, type_text: &str) -> &mut Self {
        self.column_with_options(name, type_text, ColumnOptions::default())
    }

    /// Declare a column. Type names found in the geometry registry are
    /// deferred; anything else is rendered inline as-is.
    pub fn column_with_options(
        &mut self,
        name: &str,
        type_text: &str,
        options: ColumnOptions,
    ) -> &mut Self {
        if let Some(kind) = GeometryKind::from_sql_name(type_text) {
            let mut descriptor = GeometryDescriptor::new(kind).with_srid(options.srid);
            if options.with_z {
                descriptor = descriptor.with_z();
            }
            if options.with_m {
                descriptor = descriptor.with_m();
            }
            self.spatial_columns.push(SpatialColumnDef {
                name: name.to_string(),
                descriptor,
                not_null: options.not_null,
            });
        } else {
            let mut sql = format!("{name} {type_text}");
            if let Some(default) = &options.default {
                sql.push_str(&format!(" DEFAULT {default}"));
            }
            if options.not_null {
                sql.push_str(" NOT NULL");
            }
            self.plain_columns.push(sql);
        }
        self
    }

    /// Inline column body for the `CREATE TABLE` statement.
    pub fn body_sql(&self) -> String {
        self.plain_columns.join(", ")
    }

    /// Deferred geometry columns, in declaration order.
    pub fn spatial_columns(&self) -> &[SpatialColumnDef] {
        &self.spatial_columns
    }
}
