//! Core physical constants and shared value types for impact modelling.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Physical constants (SI units unless noted)

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance to the antipode (km)
pub const EARTH_HALF_CIRCUMFERENCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// Total length of Earth's coastlines (km, CIA World Factbook)
pub const EARTH_COASTLINE_KM: f64 = 356_000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Default impact angle (degrees from horizontal).
///
/// 45° is the statistically most likely entry angle for random impactors.
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Time offsets are expressed in years; these convert the canonical horizons.
pub const HOURS_PER_YEAR: f64 = 8760.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Surface the asteroid strikes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Continental crust.
    #[default]
    Land,
    /// Open ocean. Enables tsunami modelling.
    Water,
}

impl TargetType {
    /// Returns true for ocean impacts.
    pub fn is_water(self) -> bool {
        matches!(self, TargetType::Water)
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            TargetType::Land => "land",
            TargetType::Water => "water",
        }
    }
}

/// Replace a non-finite or negative intermediate with its boundary value.
///
/// Consumers must always be able to render a result, so degenerate values are
/// substituted and logged instead of being surfaced as errors.
pub(crate) fn non_negative(value: f64, quantity: &'static str) -> f64 {
    if value.is_nan() {
        warn!(quantity, "non-finite value substituted with 0");
        0.0
    } else if value == f64::INFINITY {
        warn!(quantity, "overflowing value clamped to f64::MAX");
        f64::MAX
    } else if value < 0.0 {
        warn!(quantity, value, "negative value clamped to 0");
        0.0
    } else {
        value
    }
}

/// Clamp a percentage into [0, 100], treating NaN as `fallback`.
pub(crate) fn clamp_percent(value: f64, fallback: f64, quantity: &'static str) -> f64 {
    if value.is_nan() {
        warn!(quantity, fallback, "non-finite percentage substituted");
        return fallback;
    }
    value.clamp(0.0, 100.0)
}
