//! Schema statement generation: spatial DDL, table definitions, and index
//! descriptors.

pub mod index;
pub mod statement;
pub mod table;

pub use index::{IndexDefinition, IndexRow};
pub use table::{ColumnOptions, SpatialColumnDef, TableDefinition};
