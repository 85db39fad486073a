//! Growth, decay and recovery curves of the temporal projection.
//!
//! The time-independent amplitudes are derived once per impact into a
//! [`ProjectionBasis`]; each indicator is then a closed-form function of the
//! offset. Every curve is built from `exp` of a non-positive argument, so
//! evaluation stays finite for any offset in the supported domain and any
//! yield the effects calculator can produce.

use crate::config::ProjectionCalibration;
use crate::effects::ImmediateEffects;
use crate::exposure::ExposureSet;
use crate::types::{clamp_percent, non_negative};

/// Time-independent amplitudes of one impact's projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionBasis {
    /// Killed at the impact instant.
    pub immediate_casualties: f64,
    /// Additional deaths that accrue over the following days.
    pub secondary_casualties: f64,
    /// Displacement once evacuation is complete.
    pub peak_displaced: f64,
    /// Displacement that never resolves.
    pub permanent_displaced: f64,
    /// Stratospheric aerosol loading (kg).
    pub aerosol_loading: f64,
    /// Peak global cooling (°C, positive).
    pub cooling_amplitude: f64,
    /// Uninhabitable share of the reference region at impact (%).
    pub initial_habitat_loss: f64,
    /// Uninhabitable share that never recovers (%).
    pub permanent_habitat_loss: f64,
}

impl ProjectionBasis {
    pub fn derive(effects: &ImmediateEffects, exposure: &ExposureSet, cal: &ProjectionCalibration) -> Self {
        let summary = &exposure.summary;
        let immediate_casualties = non_negative(summary.immediate_casualties(), "immediate casualties");

        let blast_survivors = summary.blast_zone_survivors();
        let secondary_casualties = non_negative(
            blast_survivors * cal.secondary_casualty_fraction,
            "secondary casualties",
        );

        let evacuees = (blast_survivors - secondary_casualties).max(0.0) * cal.evacuation_fraction
            + (summary.light.survivors() + summary.thermal_only.survivors()) * cal.light_evacuation_fraction;
        let evacuees = non_negative(evacuees, "peak displacement");

        let mut permanent_displaced = summary.destroyed.survivors() * cal.permanent_displacement_fraction;
        if immediate_casualties > 0.0 {
            // Nobody left to evacuate: the bereaved still leave
            let reference = if evacuees > 0.0 { evacuees } else { immediate_casualties };
            permanent_displaced = permanent_displaced.max(reference * cal.min_permanent_displacement_ratio);
        }
        let permanent_displaced = non_negative(permanent_displaced, "permanent displacement");
        let peak_displaced = evacuees.max(permanent_displaced);

        let aerosol_loading = aerosol_loading(effects, cal);
        let cooling_amplitude = cooling_amplitude(aerosol_loading, cal);

        let mut initial_habitat_loss = initial_habitat_loss(effects, cal);
        let mut permanent_habitat_loss = 100.0 * effects.crater.footprint_km2() / cal.reference_region_km2;
        if immediate_casualties > 0.0 {
            // Floor must stay visible against 100 in f64
            let floor = cal.min_permanent_loss_pct.max(100.0 * f64::EPSILON);
            initial_habitat_loss = initial_habitat_loss.max(floor);
            permanent_habitat_loss = permanent_habitat_loss.max(floor);
        }
        let permanent_habitat_loss =
            non_negative(permanent_habitat_loss, "permanent habitat loss").min(initial_habitat_loss);

        Self {
            immediate_casualties,
            secondary_casualties,
            peak_displaced,
            permanent_displaced,
            aerosol_loading,
            cooling_amplitude,
            initial_habitat_loss,
            permanent_habitat_loss,
        }
    }

    /// Cumulative deaths. Zero before impact, the immediate toll at impact,
    /// then a saturating rise towards immediate + secondary.
    pub fn casualties(&self, t: f64, cal: &ProjectionCalibration) -> f64 {
        if t < 0.0 {
            0.0
        } else {
            self.immediate_casualties + self.secondary_casualties * rise(t, cal.secondary_casualty_rate)
        }
    }

    /// People away from home: a fast evacuation ramp multiplied by a slow
    /// resettlement decay towards the permanent floor.
    pub fn displaced(&self, t: f64, cal: &ProjectionCalibration) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let decay = (-t / cal.resettlement_years).exp();
        let level = self.permanent_displaced + (self.peak_displaced - self.permanent_displaced) * decay;
        rise(t, cal.evacuation_rate) * level
    }

    /// Global temperature anomaly (°C, non-positive).
    pub fn temperature_anomaly(&self, t: f64, cal: &ProjectionCalibration) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let anomaly = -self.cooling_amplitude
            * rise(t, 1.0 / cal.climate_onset_years)
            * (-t / cal.climate_recovery_years).exp();
        anomaly.max(-cal.max_cooling_c)
    }

    /// Food production relative to the pre-impact baseline (%). The shortfall
    /// onset lags the cooling by a growing season.
    pub fn food_production_index(&self, t: f64, cal: &ProjectionCalibration) -> f64 {
        if t <= 0.0 {
            return 100.0;
        }
        let shortfall = cal.food_loss_per_degree
            * self.cooling_amplitude
            * rise(t, 1.0 / cal.food_onset_years)
            * (-t / cal.food_recovery_years).exp();
        clamp_percent(100.0 - shortfall, 100.0, "food production index")
    }

    /// Habitable share of the reference region (%). The loss appears at
    /// impact and recovers towards the permanent crater footprint.
    pub fn habitable_area_fraction(&self, t: f64, cal: &ProjectionCalibration) -> f64 {
        if t < 0.0 {
            return 100.0;
        }
        let loss = self.permanent_habitat_loss
            + (self.initial_habitat_loss - self.permanent_habitat_loss)
                * (-t / cal.habitat_recovery_years).exp();
        clamp_percent(100.0 - loss, 100.0, "habitable area")
    }
}

/// 1 − e^(−rate·t), accurate for small arguments.
#[inline]
fn rise(t: f64, rate: f64) -> f64 {
    -(-rate * t).exp_m1()
}

/// Aerosols lofted into the stratosphere (kg). Ocean impacts add water vapour
/// and sea salt.
pub fn aerosol_loading(effects: &ImmediateEffects, cal: &ProjectionCalibration) -> f64 {
    let medium = if effects.target_type.is_water() {
        cal.water_aerosol_multiplier
    } else {
        1.0
    };
    non_negative(effects.ejecta_mass * cal.stratospheric_fraction * medium, "aerosol loading")
}

/// Peak cooling for a given loading, saturating at the configured ceiling.
pub fn cooling_amplitude(aerosol_loading: f64, cal: &ProjectionCalibration) -> f64 {
    let saturation = -(-aerosol_loading / cal.aerosol_saturation_kg).exp_m1();
    (cal.max_cooling_c * saturation).clamp(0.0, cal.max_cooling_c)
}

/// Uninhabitable share of the reference region right after impact (%).
///
/// The 5 psi disc counts fully, the 1–5 psi ring and the thermal-only ring
/// count with their configured weights.
pub fn initial_habitat_loss(effects: &ImmediateEffects, cal: &ProjectionCalibration) -> f64 {
    let r5 = effects.airblast_radius.psi5;
    let r1 = effects.airblast_radius.psi1;
    let rt = effects.thermal_radius;

    let weighted = r5 * r5
        + cal.light_blast_weight * (r1 * r1 - r5 * r5).max(0.0)
        + cal.thermal_weight * (rt * rt - r1 * r1).max(0.0);
    let pct = 100.0 * std::f64::consts::PI * weighted / cal.reference_region_km2;
    non_negative(pct, "habitat loss").min(100.0)
}
