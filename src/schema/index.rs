//! Index descriptors and catalog index introspection.

use log::trace;

/// Access method name identifying a spatial index in the catalog.
pub const SPATIAL_INDEX_METHOD: &str = "gist";

/// One index on a table, spatial or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub table: String,
    pub name: String,
    /// Indexed columns, in catalog order.
    pub columns: Vec<String>,
    pub unique: bool,
    pub spatial: bool,
}

/// One row of the index introspection query:
/// index name, uniqueness, column name, access method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,
    pub unique: bool,
    pub column: String,
    pub access_method: String,
}

impl IndexRow {
    /// Build from a raw text row. Booleans arrive as `t`/`f`.
    pub fn from_text_row(row: &[String]) -> Option<Self> {
        if row.len() < 4 {
            return None;
        }
        Some(Self {
            name: row[0].clone(),
            unique: row[1] == "t",
            column: row[2].clone(),
            access_method: row[3].clone(),
        })
    }
}

/// Catalog query listing index/column associations for a table, one row per
/// indexed column, sorted by index name. Primary-key indexes are excluded.
pub fn index_query_sql(table: &str) -> String {
    format!(
        "SELECT i.relname, d.indisunique, a.attname, am.amname \
         FROM pg_class t, pg_class i, pg_index d, pg_attribute a, pg_am am \
         WHERE i.relkind = 'i' \
         AND d.indexrelid = i.oid \
         AND d.indisprimary = 'f' \
         AND t.oid = d.indrelid \
         AND i.relam = am.oid \
         AND t.relname = '{table}' \
         AND a.attrelid = t.oid \
         AND ( d.indkey[0]=a.attnum OR d.indkey[1]=a.attnum \
            OR d.indkey[2]=a.attnum OR d.indkey[3]=a.attnum \
            OR d.indkey[4]=a.attnum OR d.indkey[5]=a.attnum \
            OR d.indkey[6]=a.attnum OR d.indkey[7]=a.attnum \
            OR d.indkey[8]=a.attnum OR d.indkey[9]=a.attnum ) \
         ORDER BY i.relname"
    )
}

/// Group consecutive rows sharing an index name into one definition.
///
/// Input must be pre-sorted by index name (the introspection query orders
/// by it). An index is spatial iff its access method is GiST.
pub fn group_index_rows(table: &str, rows: &[IndexRow]) -> Vec<IndexDefinition> {
    let mut indexes: Vec<IndexDefinition> = Vec::new();

    for row in rows {
        match indexes.last_mut() {
            Some(current) if current.name == row.name => {
                current.columns.push(row.column.clone());
            }
            _ => {
                trace!("index {} on {table} (am={})", row.name, row.access_method);
                indexes.push(IndexDefinition {
                    table: table.to_string(),
                    name: row.name.clone(),
                    columns: vec![row.column.clone()],
                    unique: row.unique,
                    spatial: row.access_method == SPATIAL_INDEX_METHOD,
                });
            }
        }
    }

    indexes
}
