//! GeoJSON parsing and feature classification.
//!
//! The top level must be a `FeatureCollection`.  Features are partitioned by
//! geometry type (`LineString` → paths, `Polygon` → buildings, `Point` →
//! points of interest); any other geometry type is silently skipped.
//! Coordinates arrive in GeoJSON `[longitude, latitude]` order and are
//! swapped into `GeoPoint { lat, lon }` here, once, at the boundary.

use std::path::Path;

use geojson::{Feature, GeoJson, JsonValue, Value};

use cg_core::GeoPoint;

use crate::error::GeoJsonError;
use crate::feature::{BuildingFeature, FeatureSet, PathFeature, PointFeature};

// ── Public entry points ───────────────────────────────────────────────────────

/// Load and classify features from a GeoJSON file.
///
/// # Errors
///
/// Returns [`GeoJsonError::Io`] on file errors, [`GeoJsonError::Parse`] when
/// the document is not valid GeoJSON, and [`GeoJsonError::Malformed`] when a
/// feature is structurally unusable (see [`parse_features`]).
pub fn load_features(path: &Path) -> Result<FeatureSet, GeoJsonError> {
    let text = std::fs::read_to_string(path)?;
    parse_features(&text)
}

/// Like [`load_features`] but parses GeoJSON text directly.
///
/// Useful for testing and for callers that already hold the document in
/// memory.  Fails fast on the first malformed feature — no partial
/// `FeatureSet` escapes.
pub fn parse_features(text: &str) -> Result<FeatureSet, GeoJsonError> {
    let geojson: GeoJson = text.parse()?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) => return Err(GeoJsonError::NotACollection("a single Feature")),
        GeoJson::Geometry(_) => return Err(GeoJsonError::NotACollection("a bare Geometry")),
    };

    let mut set = FeatureSet::default();

    for (index, feature) in collection.features.iter().enumerate() {
        let name = feature_name(index, feature)?;

        let Some(geometry) = &feature.geometry else {
            return Err(malformed(index, &name, "feature has no geometry"));
        };

        match &geometry.value {
            Value::LineString(line) => {
                let coords = positions_to_points(index, &name, line)?;
                set.paths.push(PathFeature { coords });
            }
            Value::Polygon(rings) => {
                let Some(outer) = rings.first() else {
                    return Err(malformed(index, &name, "polygon has no rings"));
                };
                let outer_ring = positions_to_points(index, &name, outer)?;
                set.buildings.push(BuildingFeature { name, outer_ring });
            }
            Value::Point(position) => {
                let position = position_to_point(index, &name, position)?;
                set.points.push(PointFeature { name, position });
            }
            // MultiPoint, MultiLineString, MultiPolygon, GeometryCollection:
            // not part of the campus export format.
            _ => {}
        }
    }

    Ok(set)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Extract `properties.name`.  A missing properties object, a missing key,
/// or an explicit `null` all yield the empty name (the feature is treated as
/// unnamed); any other non-string value is malformed input.
fn feature_name(index: usize, feature: &Feature) -> Result<String, GeoJsonError> {
    match feature.property("name") {
        None | Some(JsonValue::Null) => Ok(String::new()),
        Some(value) => value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| malformed(index, "", "property \"name\" is not a string")),
    }
}

fn positions_to_points(
    index: usize,
    name: &str,
    positions: &[Vec<f64>],
) -> Result<Vec<GeoPoint>, GeoJsonError> {
    positions
        .iter()
        .map(|p| position_to_point(index, name, p))
        .collect()
}

/// GeoJSON positions are `[longitude, latitude, ...]`; extra ordinates
/// (altitude) are tolerated and ignored.
fn position_to_point(index: usize, name: &str, position: &[f64]) -> Result<GeoPoint, GeoJsonError> {
    match position {
        [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
        _ => Err(malformed(index, name, "position has fewer than two ordinates")),
    }
}

fn malformed(index: usize, name: &str, reason: &str) -> GeoJsonError {
    let label = if name.is_empty() {
        "unnamed".to_owned()
    } else {
        format!("{name:?}")
    };
    GeoJsonError::Malformed {
        index,
        label,
        reason: reason.to_owned(),
    }
}
