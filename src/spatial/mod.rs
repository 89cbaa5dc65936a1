//! Spatial type metadata: kinds, descriptors, constraint scraping, and the
//! hex-EWKB value codec.

pub mod codec;
pub mod column;
pub mod constraints;
pub mod descriptor;
pub mod kind;

pub use column::Column;
pub use descriptor::{GeometryDescriptor, RawGeometryInfo, UNSPECIFIED_SRID};
pub use kind::{GeometryKind, GEOMETRY_KINDS};
