//! Check-constraint scraping for spatial column metadata.
//!
//! PostGIS records the spatial type of a geometry column as three ordinary
//! check constraints (`geometrytype()`, `ndims()`, `srid()`). This module
//! recovers that metadata from the constraint definition text returned by
//! `pg_get_constraintdef`. Constraints that match none of the idioms belong
//! to non-spatial columns or unrelated checks and are skipped.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::descriptor::{GeometryDescriptor, RawGeometryInfo};
use super::kind::GeometryKind;

static GEOMETRY_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)geometrytype\(["']?([^"')]+)["']?\)\s*=\s*'([^']+)'"#).unwrap()
});

static NDIMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)ndims\(["']?([^"')]+)["']?\)\s*=\s*(\d+)"#).unwrap());

static SRID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)srid\(["']?([^"')]+)["']?\)\s*=\s*(-?\d+)"#).unwrap());

/// Catalog query returning one check-constraint definition per row for the
/// given table.
pub fn constraint_query_sql(table: &str) -> String {
    format!(
        "SELECT pg_get_constraintdef(oid) \
         FROM pg_constraint \
         WHERE conrelid = '{table}'::regclass \
         AND contype = 'c'"
    )
}

/// Scan constraint definitions and accumulate raw spatial signals per column.
///
/// Each idiom sets only the field it governs, creating the column entry on
/// first touch. The result still needs [`RawGeometryInfo::normalize`].
pub fn parse_constraint_definitions<'a, I>(definitions: I) -> HashMap<String, RawGeometryInfo>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut raw_infos: HashMap<String, RawGeometryInfo> = HashMap::new();

    for definition in definitions {
        if let Some(caps) = GEOMETRY_TYPE_RE.captures(definition) {
            let column = caps[1].to_string();
            let mut subtype = caps[2].to_string();
            // The trailing M is a dimensionality signal, not part of the
            // type name.
            let m_suffix = subtype.ends_with('M');
            if m_suffix {
                subtype.pop();
            }
            trace!("constraint subtype for {column}: {subtype} (m_suffix={m_suffix})");
            let info = raw_infos.entry(column).or_default();
            info.kind = GeometryKind::from_sql_name(&subtype);
            info.m_suffix = m_suffix;
        } else if let Some(caps) = NDIMS_RE.captures(definition) {
            let column = caps[1].to_string();
            if let Ok(dimension) = caps[2].parse::<u8>() {
                trace!("constraint ndims for {column}: {dimension}");
                raw_infos.entry(column).or_default().dimension = Some(dimension);
            }
        } else if let Some(caps) = SRID_RE.captures(definition) {
            let column = caps[1].to_string();
            if let Ok(srid) = caps[2].parse::<i32>() {
                trace!("constraint srid for {column}: {srid}");
                raw_infos.entry(column).or_default().srid = Some(srid);
            }
        }
    }

    raw_infos
}

/// Parse and normalize: constraint definitions in, descriptors out.
pub fn column_spatial_info<'a, I>(definitions: I) -> HashMap<String, GeometryDescriptor>
where
    I: IntoIterator<Item = &'a str>,
{
    parse_constraint_definitions(definitions)
        .into_iter()
        .map(|(column, raw)| (column, raw.normalize()))
        .collect()
}
