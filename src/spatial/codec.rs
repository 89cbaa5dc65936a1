//! Hex-EWKB value codec.
//!
//! PostGIS transports geometry values as hex-encoded EWKB text, both in
//! result rows and in quoted literals. The byte-level EWKB work is delegated
//! to geozero; this module owns the hex framing and the quoting contract.

use geo_types::Geometry;
use geozero::wkb::Ewkb;
use geozero::{CoordDimensions, ToGeo, ToWkb};

use super::descriptor::UNSPECIFIED_SRID;
use crate::error::{Error, Result};

/// Encode a geometry as upper-case hex EWKB, embedding the SRID unless it is
/// [`UNSPECIFIED_SRID`].
pub fn to_hex_ewkb(geometry: &Geometry<f64>, srid: i32) -> Result<String> {
    let srid = (srid != UNSPECIFIED_SRID).then_some(srid);
    let bytes = geometry
        .to_ewkb(CoordDimensions::xy(), srid)
        .map_err(|e| Error::geometry_encode(e.to_string()))?;
    Ok(hex::encode_upper(bytes))
}

/// Decode hex-EWKB text back into a geometry.
///
/// Lenient on purpose: malformed hex or malformed EWKB yields `None`, never
/// an error, so a text column that merely looks spatial leaves its raw value
/// untouched at the call site.
pub fn from_hex_ewkb(text: &str) -> Option<Geometry<f64>> {
    let bytes = hex::decode(text.trim()).ok()?;
    Ewkb(bytes).to_geo().ok()
}

/// Quote a geometry for direct embedding in SQL text: a single-quoted
/// string containing its hex-EWKB encoding.
pub fn quote(geometry: &Geometry<f64>, srid: i32) -> Result<String> {
    Ok(format!("'{}'", to_hex_ewkb(geometry, srid)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{point, polygon};

    #[test]
    fn test_encode_point_with_srid() {
        let geom = Geometry::Point(point! { x: 1.0, y: 2.0 });
        let hex = to_hex_ewkb(&geom, 4326).unwrap();
        assert_eq!(
            hex,
            "0101000020E6100000000000000000F03F0000000000000040"
        );
    }

    #[test]
    fn test_encode_point_unspecified_srid_omits_srid_flag() {
        let geom = Geometry::Point(point! { x: 1.0, y: 2.0 });
        let hex = to_hex_ewkb(&geom, UNSPECIFIED_SRID).unwrap();
        assert_eq!(hex, "0101000000000000000000F03F0000000000000040");
    }

    #[test]
    fn test_round_trip_polygon() {
        let geom = Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 4.0),
            (x: 0.0, y: 4.0),
        ]);
        let hex = to_hex_ewkb(&geom, 4326).unwrap();
        let decoded = from_hex_ewkb(&hex).expect("decodes");
        assert_eq!(decoded, geom);
    }

    #[test]
    fn test_decode_non_hex_text_is_none() {
        assert!(from_hex_ewkb("POINT(1 2)").is_none());
        assert!(from_hex_ewkb("not a geometry").is_none());
    }

    #[test]
    fn test_decode_valid_hex_invalid_wkb_is_none() {
        assert!(from_hex_ewkb("DEADBEEF").is_none());
    }

    #[test]
    fn test_quote_wraps_hex_in_single_quotes() {
        let geom = Geometry::Point(point! { x: 1.0, y: 2.0 });
        let quoted = quote(&geom, 4326).unwrap();
        assert!(quoted.starts_with("'0101000020E6100000"));
        assert!(quoted.ends_with('\''));
    }
}
