//! Canonical spatial type descriptor and its raw accumulator.
//!
//! `RawGeometryInfo` collects partial signals from check-constraint text and
//! can only leave this module through `normalize`, so a partially resolved
//! descriptor never reaches the rest of the crate.

use super::kind::GeometryKind;

/// SRID value meaning "no spatial reference declared".
pub const UNSPECIFIED_SRID: i32 = -1;

/// Normalized spatial type of a geometry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryDescriptor {
    /// Base geometry kind. Never unset; the generic kind is the default.
    pub kind: GeometryKind,
    /// Spatial reference id, or [`UNSPECIFIED_SRID`].
    pub srid: i32,
    /// Whether coordinates carry a Z value.
    pub has_z: bool,
    /// Whether coordinates carry an M value.
    pub has_m: bool,
}

impl GeometryDescriptor {
    /// Create a descriptor for a 2D geometry with no declared SRID.
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            srid: UNSPECIFIED_SRID,
            has_z: false,
            has_m: false,
        }
    }

    /// Set the spatial reference id.
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// Add a Z coordinate.
    pub fn with_z(mut self) -> Self {
        self.has_z = true;
        self
    }

    /// Add an M coordinate.
    pub fn with_m(mut self) -> Self {
        self.has_m = true;
        self
    }

    /// Coordinate dimension count registered with `AddGeometryColumn`.
    pub fn dimension(&self) -> u8 {
        match (self.has_z, self.has_m) {
            (true, true) => 4,
            (true, false) | (false, true) => 3,
            (false, false) => 2,
        }
    }

    /// Subtype token for DDL, in the spelling `AddGeometryColumn`
    /// validates against. The M-only case uses the M-suffixed token
    /// directly rather than a dimension-based spelling.
    pub fn type_sql(&self) -> String {
        let name = self.kind.constraint_name();
        if self.has_m && !self.has_z {
            format!("{name}M")
        } else {
            name.to_string()
        }
    }
}

/// Raw, possibly partial spatial signals for one column, accumulated while
/// scanning a table's check constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGeometryInfo {
    /// Declared subtype, if a `geometrytype()` constraint matched.
    pub kind: Option<GeometryKind>,
    /// Declared SRID, if an `srid()` constraint matched.
    pub srid: Option<i32>,
    /// Declared coordinate count, if an `ndims()` constraint matched.
    pub dimension: Option<u8>,
    /// Whether the subtype value carried a trailing `M`.
    pub m_suffix: bool,
}

impl RawGeometryInfo {
    /// Reconcile the accumulated signals into a consistent descriptor.
    ///
    /// Total and deterministic: every missing field has a defined default.
    /// The dimension count wins over the M-suffix signal when they disagree.
    pub fn normalize(self) -> GeometryDescriptor {
        let (has_z, has_m) = match self.dimension {
            Some(4) => (true, true),
            Some(3) => {
                if self.m_suffix {
                    (false, true)
                } else {
                    (true, false)
                }
            }
            _ => (false, false),
        };

        GeometryDescriptor {
            kind: self.kind.unwrap_or(GeometryKind::Geometry),
            srid: self.srid.unwrap_or(UNSPECIFIED_SRID),
            has_z,
            has_m,
        }
    }
}
