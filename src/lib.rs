//! PostGIS adapter layer for Rust Postgres clients.
//!
//! Adds first-class geometry column support on top of a generic schema
//! backend: spatial type metadata is recovered from PostGIS check
//! constraints, DDL goes through the extension's `AddGeometryColumn` /
//! `DropGeometryColumn` procedures, spatial indexes use GiST, and geometry
//! values travel as hex-EWKB text.
//!
//! # Example
//!
//! ```no_run
//! use postgis_adapter_rs::{
//!     ColumnDefinition, Result, SchemaBackend, SpatialConnection,
//! };
//!
//! // Your connection layer, wired to a real Postgres client.
//! struct PgBackend;
//!
//! impl SchemaBackend for PgBackend {
//!     async fn query_rows(&mut self, _sql: &str) -> Result<Vec<Vec<String>>> {
//!         Ok(vec![])
//!     }
//!     async fn execute(&mut self, _sql: &str) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn column_definitions(&mut self, _table: &str) -> Result<Vec<ColumnDefinition>> {
//!         Ok(vec![])
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut conn = SpatialConnection::new(PgBackend);
//!
//!     for column in conn.columns("places").await? {
//!         if let Some(geometry) = &column.geometry {
//!             println!("{} is a {} (srid {})", column.name, geometry.kind, geometry.srid);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod connection;
pub mod error;
pub mod predicate;
pub mod schema;
pub mod spatial;
pub mod value;

// Re-export main types
pub use backend::{ColumnDefinition, SchemaBackend};
pub use connection::{
    CreateTableOptions, IndexOptions, SpatialConnection, MIGRATION_IGNORED_TABLES,
};
pub use error::{Error, Result};
pub use predicate::DEFAULT_SRID;
pub use schema::{ColumnOptions, IndexDefinition, TableDefinition};
pub use spatial::{Column, GeometryDescriptor, GeometryKind, RawGeometryInfo, UNSPECIFIED_SRID};
pub use value::{BindValue, BoundingBox, ConditionValue, Envelope, SqlValue};
