//! Condition fragment building for spatial attributes.
//!
//! A spatial attribute is never compared with `=`: the fragment uses the
//! bounding-box intersection operator `&&`, and box-shaped inputs are
//! rewritten to `BOX3D(...)` text literals cast back to box3d with an
//! explicit SRID.

use crate::error::{Error, Result};
use crate::spatial::column::Column;
use crate::spatial::descriptor::UNSPECIFIED_SRID;
use crate::value::{box3d_text, BindValue, ConditionValue, SqlValue};

/// SRID applied to a bounding box when the caller gives none.
pub const DEFAULT_SRID: i32 = UNSPECIFIED_SRID;

/// Build the fragment and bind value for one attribute/value pair.
///
/// `column` is the introspected metadata for the attribute, when known.
/// Non-spatial attributes fall through to `plain`. Returns the fragment and
/// the bind value, or `None` for a bind-free fragment such as `IS NULL`.
pub fn build_condition<F>(
    table: &str,
    attribute: &str,
    value: &ConditionValue,
    column: Option<&Column>,
    plain: F,
) -> Result<(String, Option<BindValue>)>
where
    F: FnOnce(&str, &str, &SqlValue) -> String,
{
    let spatial = column.is_some_and(Column::is_spatial);

    if spatial {
        return spatial_condition(table, attribute, value);
    }

    match value {
        ConditionValue::Plain(sql_value) => {
            let fragment = plain(table, attribute, sql_value);
            let bind = match sql_value {
                SqlValue::Null => None,
                other => Some(BindValue::Sql(other.clone())),
            };
            Ok((fragment, bind))
        }
        _ => Err(Error::unsupported_condition_value(
            attribute,
            "geometry-shaped value on a non-spatial attribute",
        )),
    }
}

/// Build fragments for several attribute/value pairs, joined with ` AND `
/// in attribute order.
pub fn build_conditions<'a, F>(
    table: &str,
    pairs: &'a [(&'a str, ConditionValue)],
    columns: &[Column],
    mut plain: F,
) -> Result<(String, Vec<BindValue>)>
where
    F: FnMut(&str, &str, &SqlValue) -> String,
{
    let mut fragments = Vec::with_capacity(pairs.len());
    let mut binds = Vec::new();

    for (attribute, value) in pairs {
        let column = columns.iter().find(|c| c.name == *attribute);
        let (fragment, bind) = build_condition(table, attribute, value, column, &mut plain)?;
        fragments.push(fragment);
        if let Some(bind) = bind {
            binds.push(bind);
        }
    }

    Ok((fragments.join(" AND "), binds))
}

fn spatial_condition(
    table: &str,
    attribute: &str,
    value: &ConditionValue,
) -> Result<(String, Option<BindValue>)> {
    match value {
        ConditionValue::Geometry(geometry) => Ok((
            format!("{table}.\"{attribute}\" && ?"),
            Some(BindValue::Geometry(geometry.clone())),
        )),
        ConditionValue::BoundingBox(bbox) => {
            check_corners(attribute, &bbox.lower, &bbox.upper)?;
            let srid = bbox.srid.unwrap_or(DEFAULT_SRID);
            Ok((
                format!("{table}.\"{attribute}\" && SetSRID(?::box3d, {srid})"),
                Some(BindValue::Sql(SqlValue::Text(box3d_text(
                    &bbox.lower,
                    &bbox.upper,
                )))),
            ))
        }
        ConditionValue::Envelope(envelope) => {
            check_corners(attribute, &envelope.lower, &envelope.upper)?;
            Ok((
                format!("{table}.\"{attribute}\" && SetSRID(?::box3d, {})", envelope.srid),
                Some(BindValue::Sql(SqlValue::Text(box3d_text(
                    &envelope.lower,
                    &envelope.upper,
                )))),
            ))
        }
        ConditionValue::Plain(_) => Err(Error::unsupported_condition_value(
            attribute,
            "expected a geometry, two box corners, or an envelope",
        )),
    }
}

fn check_corners(attribute: &str, lower: &[f64], upper: &[f64]) -> Result<()> {
    for corner in [lower, upper] {
        if corner.len() != 2 && corner.len() != 3 {
            return Err(Error::unsupported_condition_value(
                attribute,
                format!("box corner must have 2 or 3 coordinates, got {}", corner.len()),
            ));
        }
    }
    if lower.len() != upper.len() {
        return Err(Error::unsupported_condition_value(
            attribute,
            format!(
                "box corners must have the same number of coordinates, got {} and {}",
                lower.len(),
                upper.len()
            ),
        ));
    }
    Ok(())
}
