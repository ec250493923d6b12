//! `cg-geojson` — GeoJSON intake for the campus_graph toolkit.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`feature`] | `FeatureSet`, `PathFeature`, `BuildingFeature`, `PointFeature` |
//! | [`loader`]  | `load_features`, `parse_features`                              |
//! | [`error`]   | `GeoJsonError`, `GeoJsonResult<T>`                             |

pub mod error;
pub mod feature;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{GeoJsonError, GeoJsonResult};
pub use feature::{BuildingFeature, FeatureSet, PathFeature, PointFeature};
pub use loader::{load_features, parse_features};
