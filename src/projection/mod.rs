//! Temporal projection of an impact's consequences.
//!
//! Given the immediate effects and the exposure they produce, the projector
//! evaluates casualties, displacement, climate, food and habitability at any
//! offset from the impact. Queries are pure: re-querying the same offset
//! returns a bit-identical snapshot, so consumers may scrub freely.

pub mod curves;
pub mod narrative;

#[cfg(test)]
mod proptest_projection;

use serde::Serialize;

use crate::config::ProjectionCalibration;
use crate::effects::ImmediateEffects;
use crate::exposure::ExposureSet;
use crate::time::{TimeBand, clamp_offset, offset_label};

pub use curves::ProjectionBasis;

/// State of the world at one offset from impact. Pure value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSnapshot {
    /// Offset from impact (years), after clamping.
    pub time_years: f64,
    pub label: String,
    pub band: TimeBand,
    /// Cumulative deaths.
    pub casualties: f64,
    /// People away from home.
    pub displaced: f64,
    /// Global mean temperature change (°C).
    pub temperature_anomaly: f64,
    /// Habitable share of the affected region (0–100 %).
    pub habitable_area_fraction: f64,
    /// Food production relative to baseline (0–100 %).
    pub food_production_index: f64,
    pub narrative: String,
}

/// Project with the default calibration.
pub fn project_at(effects: &ImmediateEffects, exposure: &ExposureSet, time_years: f64) -> TimelineSnapshot {
    project_at_with(effects, exposure, time_years, &ProjectionCalibration::default())
}

/// Project the consequences of an impact to `time_years` after it.
///
/// # Arguments
/// * `effects` - Immediate effects of the impact
/// * `exposure` - Exposure of the geo datasets to those effects
/// * `time_years` - Offset from impact; clamped to [-0.5, 50], NaN is the impact instant
/// * `cal` - Curve constants
///
/// # Returns
/// The snapshot at the clamped offset.
pub fn project_at_with(
    effects: &ImmediateEffects,
    exposure: &ExposureSet,
    time_years: f64,
    cal: &ProjectionCalibration,
) -> TimelineSnapshot {
    let basis = ProjectionBasis::derive(effects, exposure, cal);
    project_from_basis(effects, &basis, time_years, cal)
}

/// Evaluate an already derived basis. Lets callers sampling many offsets of
/// the same impact derive the amplitudes once.
pub fn project_from_basis(
    effects: &ImmediateEffects,
    basis: &ProjectionBasis,
    time_years: f64,
    cal: &ProjectionCalibration,
) -> TimelineSnapshot {
    let t = clamp_offset(time_years);

    let mut snapshot = TimelineSnapshot {
        time_years: t,
        label: offset_label(t),
        band: TimeBand::of(t),
        casualties: basis.casualties(t, cal),
        displaced: basis.displaced(t, cal),
        temperature_anomaly: basis.temperature_anomaly(t, cal),
        habitable_area_fraction: basis.habitable_area_fraction(t, cal),
        food_production_index: basis.food_production_index(t, cal),
        narrative: String::new(),
    };
    snapshot.narrative = narrative::describe(effects, &snapshot);
    snapshot
}
