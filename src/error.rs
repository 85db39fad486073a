//! Error types for the impact engine.
//!
//! Validation failures stop a computation before it starts. Data problems in
//! individual geo records are soft: the record is skipped and reported.

use serde::Serialize;

/// Impact parameters violate a domain constraint.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("asteroid diameter must be positive and finite, got {0} m")]
    NonPositiveDiameter(f64),

    #[error("impact velocity must be positive and finite, got {0} km/s")]
    NonPositiveVelocity(f64),

    #[error("density must be positive and finite, got {0} kg/m³")]
    NonPositiveDensity(f64),

    #[error("impact angle must be in (0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("unknown composition tag '{0}'")]
    UnknownComposition(String),
}

/// A geo record cannot take part in aggregation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum DataUnavailable {
    #[error("record has no location")]
    MissingLocation,

    #[error("coordinates ({lat}, {lng}) are not a valid position")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("population {population} is not a valid head count")]
    InvalidPopulation { population: f64 },
}

/// Engine calibration could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("malformed engine config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("calibration value {field} = {value} must be positive and finite")]
    NonPositive { field: &'static str, value: f64 },

    #[error("calibration value {field} = {value} must lie in [0, 1]")]
    NotAFraction { field: &'static str, value: f64 },

    #[error("airblast coefficients must increase as overpressure falls (20 < 10 < 5 < 1 psi)")]
    UnorderedBlastCoefficients,
}
