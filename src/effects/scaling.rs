//! Scaling laws for immediate impact effects.
//!
//! Each law takes the yield (or a quantity derived from it) plus the
//! calibration constants and returns a single non-negative value. Yields are
//! in megatons of TNT, radii in kilometers, crater dimensions in meters.

use tracing::warn;

use crate::config::{BlastCoefficients, EffectsCalibration};
use crate::types::{DEG_TO_RAD, EARTH_COASTLINE_KM, JOULES_PER_MEGATON, non_negative};

use super::{Crater, Overpressure, Tsunami};

/// Convert joules to megatons of TNT.
#[inline]
pub fn tnt_megatons(energy_j: f64) -> f64 {
    energy_j / JOULES_PER_MEGATON
}

/// Fraction of kinetic energy coupled into the target.
///
/// Impacts at or above `full_coupling_angle_deg` couple fully; shallower
/// impacts lose energy with sin(angle), normalised so the curve is
/// continuous at the full-coupling angle. The factor is therefore
/// sin(θ)/sin(θ_full), not a bare sin(θ). Angles below the minimum valid
/// angle (including zero and NaN) are substituted with that minimum.
pub fn coupling_efficiency(angle_deg: f64, cal: &EffectsCalibration) -> f64 {
    let angle = if angle_deg >= cal.min_impact_angle_deg {
        angle_deg.min(90.0)
    } else {
        warn!(
            angle_deg,
            substituted = cal.min_impact_angle_deg,
            "impact angle below minimum, substituting"
        );
        cal.min_impact_angle_deg
    };

    if angle >= cal.full_coupling_angle_deg {
        1.0
    } else {
        (angle * DEG_TO_RAD).sin() / (cal.full_coupling_angle_deg * DEG_TO_RAD).sin()
    }
}

/// Final crater from coupled yield: D ∝ W^⅓, depth = D × depth ratio.
pub fn crater(coupled_mt: f64, cal: &EffectsCalibration) -> Crater {
    let diameter = non_negative(
        cal.crater_km_per_cbrt_mt * coupled_mt.cbrt() * 1000.0,
        "crater diameter",
    );
    Crater {
        diameter,
        depth: diameter * cal.crater_depth_ratio,
    }
}

/// Radius (km) at which overpressure exceeds `threshold`, by cube-root scaling.
pub fn airblast_radius(tnt_mt: f64, threshold: Overpressure, coefficients: &BlastCoefficients) -> f64 {
    let k = match threshold {
        Overpressure::Psi20 => coefficients.psi20,
        Overpressure::Psi10 => coefficients.psi10,
        Overpressure::Psi5 => coefficients.psi5,
        Overpressure::Psi1 => coefficients.psi1,
    };
    non_negative(k * tnt_mt.cbrt(), "airblast radius")
}

/// Radius (km) of third-degree burns. Radiant flux falls off with the square
/// of distance, so the radius scales with √W. Capped at the antipode.
pub fn thermal_radius(tnt_mt: f64, cal: &EffectsCalibration) -> f64 {
    let radius = non_negative(cal.thermal_km_per_sqrt_mt * tnt_mt.sqrt(), "thermal radius");
    radius.min(cal.max_thermal_radius_km)
}

/// Richter-like magnitude: M = ⅔·log10(E) − offset, clamped to [0, 10].
pub fn seismic_magnitude(energy_j: f64, cal: &EffectsCalibration) -> f64 {
    if energy_j.is_nan() || energy_j <= 0.0 {
        return 0.0;
    }
    let magnitude = 2.0 / 3.0 * energy_j.log10() - cal.seismic_offset;
    if magnitude.is_nan() {
        warn!(energy_j, "seismic magnitude degenerate, substituting 0");
        return 0.0;
    }
    magnitude.clamp(0.0, 10.0)
}

/// Tsunami generated by an ocean impact.
///
/// The rim wave amplitude is a fixed fraction of the crater diameter but
/// cannot exceed the water column. The affected coastline grows with the
/// wave height and the yield and is capped at Earth's total coastline.
pub fn tsunami(crater: &Crater, tnt_mt: f64, cal: &EffectsCalibration) -> Tsunami {
    let max_wave_height = (crater.diameter / cal.wave_height_divisor).min(cal.ocean_depth_m);
    let coastline =
        cal.coastline_km_coefficient * max_wave_height.sqrt() * tnt_mt.cbrt();

    Tsunami {
        max_wave_height: non_negative(max_wave_height, "tsunami wave height"),
        affected_coastline_length: non_negative(coastline, "tsunami coastline").min(EARTH_COASTLINE_KM),
    }
}

/// Mass excavated from a bowl-shaped crater (paraboloid volume πD²d/8).
pub fn ejecta_mass(crater: &Crater, cal: &EffectsCalibration) -> f64 {
    let volume = std::f64::consts::PI / 8.0 * crater.diameter.powi(2) * crater.depth;
    non_negative(volume * cal.target_density, "ejecta mass")
}
