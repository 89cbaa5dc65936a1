//! Geometry kind enum and the registry of recognized geometry type names.
//!
//! The registry is the single place where raw type-name strings are
//! classified. Everything past this boundary operates on `GeometryKind`,
//! never on strings.

/// Base geometry kind of a spatial column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// The generic top type; used when no subtype constraint is declared.
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

/// All recognized kinds, in registry order.
pub const GEOMETRY_KINDS: [GeometryKind; 8] = [
    GeometryKind::Geometry,
    GeometryKind::Point,
    GeometryKind::LineString,
    GeometryKind::Polygon,
    GeometryKind::MultiPoint,
    GeometryKind::MultiLineString,
    GeometryKind::MultiPolygon,
    GeometryKind::GeometryCollection,
];

impl GeometryKind {
    /// Classify a type-name string from the catalog or a user schema
    /// declaration. Case-insensitive. Returns `None` for anything that is
    /// not a geometry type, which routes the column to the generic path.
    pub fn from_sql_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "geometry" => Some(GeometryKind::Geometry),
            "point" => Some(GeometryKind::Point),
            "line_string" | "linestring" => Some(GeometryKind::LineString),
            "polygon" => Some(GeometryKind::Polygon),
            "multi_point" | "multipoint" => Some(GeometryKind::MultiPoint),
            "multi_line_string" | "multilinestring" => Some(GeometryKind::MultiLineString),
            "multi_polygon" | "multipolygon" => Some(GeometryKind::MultiPolygon),
            "geometry_collection" | "geometrycollection" => Some(GeometryKind::GeometryCollection),
            _ => None,
        }
    }

    /// The catalog type identifier used in generated DDL.
    pub fn sql_name(&self) -> &'static str {
        match self {
            GeometryKind::Geometry => "geometry",
            GeometryKind::Point => "point",
            GeometryKind::LineString => "line_string",
            GeometryKind::Polygon => "polygon",
            GeometryKind::MultiPoint => "multi_point",
            GeometryKind::MultiLineString => "multi_line_string",
            GeometryKind::MultiPolygon => "multi_polygon",
            GeometryKind::GeometryCollection => "geometry_collection",
        }
    }

    /// The subtype token as it appears in PostGIS `geometrytype()` check
    /// constraints (upper case, no underscores).
    pub fn constraint_name(&self) -> &'static str {
        match self {
            GeometryKind::Geometry => "GEOMETRY",
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Whether a raw column type string names a recognized geometry type.
    pub fn is_spatial_type(type_text: &str) -> bool {
        Self::from_sql_name(type_text).is_some()
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_name())
    }
}
