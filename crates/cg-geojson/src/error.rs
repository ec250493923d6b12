//! Intake error type.

use thiserror::Error;

/// Errors produced while reading and classifying GeoJSON input.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] geojson::Error),

    #[error("expected a FeatureCollection at the top level, found {0}")]
    NotACollection(&'static str),

    #[error("feature #{index} ({label}): {reason}")]
    Malformed {
        index: usize,
        label: String,
        reason: String,
    },
}

/// Alias for `Result<T, GeoJsonError>`.
pub type GeoJsonResult<T> = Result<T, GeoJsonError>;
