//! Column metadata produced by table introspection.

use super::descriptor::GeometryDescriptor;

/// Metadata for one column of an introspected table.
///
/// Built fresh on every `columns()` call and immutable afterwards. Spatial
/// columns carry their normalized [`GeometryDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// SQL-visible type text as reported by the catalog.
    pub sql_type: String,
    /// Default value expression, if any.
    pub default: Option<String>,
    /// Whether the column rejects NULL.
    pub not_null: bool,
    /// Spatial type, when the column is a geometry column.
    pub geometry: Option<GeometryDescriptor>,
}

impl Column {
    /// Create a plain (non-spatial) column record.
    pub fn plain(
        name: impl Into<String>,
        sql_type: impl Into<String>,
        default: Option<String>,
        not_null: bool,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            default,
            not_null,
            geometry: None,
        }
    }

    /// Create a spatial column record.
    pub fn spatial(
        name: impl Into<String>,
        sql_type: impl Into<String>,
        default: Option<String>,
        not_null: bool,
        geometry: GeometryDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            default,
            not_null,
            geometry: Some(geometry),
        }
    }

    /// Whether this column holds geometry values.
    pub fn is_spatial(&self) -> bool {
        self.geometry.is_some()
    }
}
