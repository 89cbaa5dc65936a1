//! Value shapes crossing the adapter boundary: scalar binds, geometry
//! values, and the box-shaped inputs accepted by spatial conditions.

use geo_types::Geometry;

use crate::spatial::codec;
use crate::spatial::descriptor::UNSPECIFIED_SRID;
use crate::error::Result;

/// Scalar SQL value handled by the generic (non-spatial) layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Render as a SQL literal for direct embedding in statement text.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(true) => "TRUE".to_string(),
            SqlValue::Bool(false) => "FALSE".to_string(),
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Float(f) => f.to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

/// Two opposite corners of a bounding box, with an optional SRID override.
///
/// Corners carry 2 or 3 coordinates each (`[x, y]` or `[x, y, z]`).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub srid: Option<i32>,
}

impl BoundingBox {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            lower,
            upper,
            srid: None,
        }
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = Some(srid);
        self
    }
}

/// Axis-aligned bounding box carrying its own SRID.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub srid: i32,
}

impl Envelope {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>, srid: i32) -> Self {
        Self { lower, upper, srid }
    }
}

/// A user-supplied value for an attribute/value condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// A geometry value; compared by bounding-box intersection on spatial
    /// attributes.
    Geometry(Geometry<f64>),
    /// Two opposite box corners with an optional SRID override.
    BoundingBox(BoundingBox),
    /// A box with its own SRID.
    Envelope(Envelope),
    /// A plain scalar, handled by the generic condition path.
    Plain(SqlValue),
}

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// Encoded as hex EWKB at bind time.
    Geometry(Geometry<f64>),
    /// Scalar bind.
    Sql(SqlValue),
}

impl BindValue {
    /// Render as a SQL literal. Geometry values are single-quoted hex-EWKB
    /// strings with no embedded SRID.
    pub fn to_literal(&self) -> Result<String> {
        match self {
            BindValue::Geometry(geom) => codec::quote(geom, UNSPECIFIED_SRID),
            BindValue::Sql(value) => Ok(value.to_literal()),
        }
    }
}

/// `BOX3D(x1 y1[ z1],x2 y2[ z2])` literal text from two corners.
pub(crate) fn box3d_text(lower: &[f64], upper: &[f64]) -> String {
    format!("BOX3D({},{})", corner_text(lower), corner_text(upper))
}

fn corner_text(coords: &[f64]) -> String {
    coords
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
