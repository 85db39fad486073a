//! Engine calibration.
//!
//! Every tunable constant of the engine lives here. The scaling coefficients
//! are empirical: they should be checked against the reference events in
//! [`crate::scenarios`] rather than trusted by construction. Partial JSON
//! overrides are supported; absent fields keep their default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{EARTH_HALF_CIRCUMFERENCE_KM, WEEKS_PER_YEAR};

/// Full calibration for all engine stages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub effects: EffectsCalibration,
    pub exposure: ExposureCalibration,
    pub projection: ProjectionCalibration,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON calibration document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable by the curves that consume it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.effects.validate()?;
        self.exposure.validate()?;
        self.projection.validate()
    }
}

/// Proportionality constants for cube-root airblast scaling (km / Mt^⅓).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastCoefficients {
    pub psi20: f64,
    pub psi10: f64,
    pub psi5: f64,
    pub psi1: f64,
}

impl Default for BlastCoefficients {
    fn default() -> Self {
        Self {
            psi20: 1.5,
            psi10: 2.2,
            psi5: 3.5,
            psi1: 8.5,
        }
    }
}

/// Constants of the immediate effects scaling laws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsCalibration {
    /// Final crater diameter per cube root of coupled yield (km / Mt^⅓).
    pub crater_km_per_cbrt_mt: f64,
    /// Simple-crater depth to diameter ratio.
    pub crater_depth_ratio: f64,
    /// Impacts at or steeper than this angle couple all of their energy (degrees).
    pub full_coupling_angle_deg: f64,
    /// Shallower angles are substituted with this value (degrees).
    pub min_impact_angle_deg: f64,
    pub airblast: BlastCoefficients,
    /// Thermal radius per square root of yield (km / Mt^½).
    pub thermal_km_per_sqrt_mt: f64,
    /// Thermal radiation cannot reach past the antipode (km).
    pub max_thermal_radius_km: f64,
    /// Offset in M = ⅔·log10(E) − offset.
    pub seismic_offset: f64,
    /// Assumed open-ocean depth for tsunami generation (m).
    pub ocean_depth_m: f64,
    /// Rim wave amplitude = crater diameter / divisor, capped by ocean depth.
    pub wave_height_divisor: f64,
    /// Coastline length heuristic: km per (√m wave height × Mt^⅓).
    pub coastline_km_coefficient: f64,
    /// Bulk density of excavated target rock (kg/m³).
    pub target_density: f64,
}

impl Default for EffectsCalibration {
    fn default() -> Self {
        Self {
            crater_km_per_cbrt_mt: 0.3,
            crater_depth_ratio: 0.2,
            full_coupling_angle_deg: 45.0,
            min_impact_angle_deg: 1.0,
            airblast: BlastCoefficients::default(),
            thermal_km_per_sqrt_mt: 8.0,
            max_thermal_radius_km: EARTH_HALF_CIRCUMFERENCE_KM,
            seismic_offset: 5.87,
            ocean_depth_m: 4000.0,
            wave_height_divisor: 14.1,
            coastline_km_coefficient: 5.0,
            target_density: 2500.0,
        }
    }
}

impl EffectsCalibration {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("effects.craterKmPerCbrtMt", self.crater_km_per_cbrt_mt)?;
        fraction("effects.craterDepthRatio", self.crater_depth_ratio)?;
        positive("effects.fullCouplingAngleDeg", self.full_coupling_angle_deg)?;
        positive("effects.minImpactAngleDeg", self.min_impact_angle_deg)?;
        positive("effects.thermalKmPerSqrtMt", self.thermal_km_per_sqrt_mt)?;
        positive("effects.maxThermalRadiusKm", self.max_thermal_radius_km)?;
        positive("effects.oceanDepthM", self.ocean_depth_m)?;
        positive("effects.waveHeightDivisor", self.wave_height_divisor)?;
        positive("effects.coastlineKmCoefficient", self.coastline_km_coefficient)?;
        positive("effects.targetDensity", self.target_density)?;
        if !self.seismic_offset.is_finite() {
            return Err(ConfigError::NonPositive {
                field: "effects.seismicOffset",
                value: self.seismic_offset,
            });
        }

        let b = &self.airblast;
        for (field, value) in [
            ("effects.airblast.psi20", b.psi20),
            ("effects.airblast.psi10", b.psi10),
            ("effects.airblast.psi5", b.psi5),
            ("effects.airblast.psi1", b.psi1),
        ] {
            positive(field, value)?;
        }
        if !(b.psi20 < b.psi10 && b.psi10 < b.psi5 && b.psi5 < b.psi1) {
            return Err(ConfigError::UnorderedBlastCoefficients);
        }
        Ok(())
    }
}

/// Fraction of a tier's population killed outright.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSeverity {
    pub destroyed: f64,
    pub severe: f64,
    pub moderate: f64,
    pub light: f64,
    pub thermal_only: f64,
}

impl Default for TierSeverity {
    fn default() -> Self {
        Self {
            destroyed: 0.9,
            severe: 0.5,
            moderate: 0.2,
            light: 0.05,
            thermal_only: 0.02,
        }
    }
}

/// Constants of the geographic aggregation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExposureCalibration {
    pub severity: TierSeverity,
    /// Extra lethality reached by the densest regions (fraction of base).
    pub density_gain: f64,
    /// Population density at which half of `density_gain` applies (people/km²).
    pub density_half_saturation: f64,
    /// No region loses more than this fraction of its population at impact.
    pub max_casualty_fraction: f64,
    /// Lowest severity reported for a disrupted infrastructure point.
    pub min_disruption_severity: f64,
}

impl Default for ExposureCalibration {
    fn default() -> Self {
        Self {
            severity: TierSeverity::default(),
            density_gain: 0.5,
            density_half_saturation: 500.0,
            max_casualty_fraction: 0.95,
            min_disruption_severity: 0.1,
        }
    }
}

impl ExposureCalibration {
    fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.severity;
        fraction("exposure.severity.destroyed", s.destroyed)?;
        fraction("exposure.severity.severe", s.severe)?;
        fraction("exposure.severity.moderate", s.moderate)?;
        fraction("exposure.severity.light", s.light)?;
        fraction("exposure.severity.thermalOnly", s.thermal_only)?;
        positive("exposure.densityHalfSaturation", self.density_half_saturation)?;
        fraction("exposure.maxCasualtyFraction", self.max_casualty_fraction)?;
        fraction("exposure.minDisruptionSeverity", self.min_disruption_severity)?;
        if !(self.density_gain >= 0.0 && self.density_gain.is_finite()) {
            return Err(ConfigError::NonPositive {
                field: "exposure.densityGain",
                value: self.density_gain,
            });
        }
        Ok(())
    }
}

/// Constants of the post-impact growth, decay and recovery curves.
///
/// Rates are per year, time constants are in years.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionCalibration {
    /// Share of surviving blast-zone population that later dies of injuries,
    /// fires and collapse.
    pub secondary_casualty_fraction: f64,
    /// Saturation rate of secondary casualties (1/yr).
    pub secondary_casualty_rate: f64,
    /// Share of surviving destroyed/severe/moderate population that flees.
    pub evacuation_fraction: f64,
    /// Share of light-damage and thermal-only survivors that flees.
    pub light_evacuation_fraction: f64,
    /// Saturation rate of the evacuation ramp (1/yr).
    pub evacuation_rate: f64,
    /// Time constant of resettlement (yr).
    pub resettlement_years: f64,
    /// Share of destroyed-zone survivors who never return.
    pub permanent_displacement_fraction: f64,
    /// Minimum permanent displacement as a share of peak displacement,
    /// applied once anyone was killed.
    pub min_permanent_displacement_ratio: f64,
    /// Share of ejecta lofted into the stratosphere.
    pub stratospheric_fraction: f64,
    /// Aerosol multiplier for ocean impacts (water vapour and sea salt).
    pub water_aerosol_multiplier: f64,
    /// Ceiling of the global cooling (°C).
    pub max_cooling_c: f64,
    /// Aerosol loading at which cooling reaches 63% of the ceiling (kg).
    pub aerosol_saturation_kg: f64,
    /// Onset time constant of the cooling (yr).
    pub climate_onset_years: f64,
    /// Relaxation time constant of the cooling (yr).
    pub climate_recovery_years: f64,
    /// Food production lost per degree of cooling (% / °C).
    pub food_loss_per_degree: f64,
    /// Onset time constant of the harvest shortfall (yr). Longer than the
    /// climate onset so food bottoms out after the anomaly peaks.
    pub food_onset_years: f64,
    /// Recovery time constant of food production (yr).
    pub food_recovery_years: f64,
    /// Reference regional area for habitability (km²).
    pub reference_region_km2: f64,
    /// Weight of the 1–5 psi ring in the uninhabitable area.
    pub light_blast_weight: f64,
    /// Weight of the thermal-only ring in the uninhabitable area.
    pub thermal_weight: f64,
    /// Recovery time constant of habitable area (yr).
    pub habitat_recovery_years: f64,
    /// Smallest habitable loss, initial and permanent, once anyone was
    /// killed (%). Raised to one ulp of 100 if set below it.
    pub min_permanent_loss_pct: f64,
}

impl Default for ProjectionCalibration {
    fn default() -> Self {
        Self {
            secondary_casualty_fraction: 0.05,
            secondary_casualty_rate: 180.0,
            evacuation_fraction: 0.6,
            light_evacuation_fraction: 0.1,
            evacuation_rate: 180.0,
            resettlement_years: 3.0,
            permanent_displacement_fraction: 0.3,
            min_permanent_displacement_ratio: 0.1,
            stratospheric_fraction: 0.01,
            water_aerosol_multiplier: 1.5,
            max_cooling_c: 26.0,
            aerosol_saturation_kg: 2.0e13,
            climate_onset_years: 1.0 / WEEKS_PER_YEAR,
            climate_recovery_years: 3.0,
            food_loss_per_degree: 10.0,
            food_onset_years: 0.25,
            food_recovery_years: 4.0,
            reference_region_km2: 1.0e7,
            light_blast_weight: 0.5,
            thermal_weight: 0.25,
            habitat_recovery_years: 5.0,
            min_permanent_loss_pct: 1e-6,
        }
    }
}

impl ProjectionCalibration {
    fn validate(&self) -> Result<(), ConfigError> {
        fraction("projection.secondaryCasualtyFraction", self.secondary_casualty_fraction)?;
        positive("projection.secondaryCasualtyRate", self.secondary_casualty_rate)?;
        fraction("projection.evacuationFraction", self.evacuation_fraction)?;
        fraction("projection.lightEvacuationFraction", self.light_evacuation_fraction)?;
        positive("projection.evacuationRate", self.evacuation_rate)?;
        positive("projection.resettlementYears", self.resettlement_years)?;
        fraction(
            "projection.permanentDisplacementFraction",
            self.permanent_displacement_fraction,
        )?;
        fraction(
            "projection.minPermanentDisplacementRatio",
            self.min_permanent_displacement_ratio,
        )?;
        fraction("projection.stratosphericFraction", self.stratospheric_fraction)?;
        positive("projection.waterAerosolMultiplier", self.water_aerosol_multiplier)?;
        positive("projection.maxCoolingC", self.max_cooling_c)?;
        positive("projection.aerosolSaturationKg", self.aerosol_saturation_kg)?;
        positive("projection.climateOnsetYears", self.climate_onset_years)?;
        positive("projection.climateRecoveryYears", self.climate_recovery_years)?;
        positive("projection.foodLossPerDegree", self.food_loss_per_degree)?;
        positive("projection.foodOnsetYears", self.food_onset_years)?;
        positive("projection.foodRecoveryYears", self.food_recovery_years)?;
        positive("projection.referenceRegionKm2", self.reference_region_km2)?;
        fraction("projection.lightBlastWeight", self.light_blast_weight)?;
        fraction("projection.thermalWeight", self.thermal_weight)?;
        positive("projection.habitatRecoveryYears", self.habitat_recovery_years)?;
        positive("projection.minPermanentLossPct", self.min_permanent_loss_pct)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAFraction { field, value })
    }
}
