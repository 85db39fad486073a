//! Immediate impact effects.
//!
//! Converts impact parameters into the effects felt in the first seconds to
//! minutes after impact: crater, airblast overpressure rings, thermal pulse,
//! ground shaking and, for ocean impacts, a tsunami.

pub mod scaling;

#[cfg(test)]
mod proptest_effects;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asteroid::{AsteroidSpec, resolve_physical_properties};
use crate::config::EffectsCalibration;
use crate::error::ValidationError;
use crate::geo::GeoPoint;
use crate::types::{DEFAULT_IMPACT_ANGLE_DEG, TargetType};

/// Everything needed to compute an impact. Fully determines all downstream
/// results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactParameters {
    /// Diameter in meters.
    pub asteroid_diameter: f64,
    /// Velocity in km/s.
    pub velocity: f64,
    /// Bulk density in kg/m³.
    pub density: f64,
    /// Degrees from horizontal.
    #[serde(default = "default_impact_angle")]
    pub impact_angle: f64,
    #[serde(default)]
    pub target_type: TargetType,
    pub latitude: f64,
    pub longitude: f64,
}

fn default_impact_angle() -> f64 {
    DEFAULT_IMPACT_ANGLE_DEG
}

impl ImpactParameters {
    /// A 45° land impact at `site`.
    pub fn new(asteroid_diameter: f64, velocity: f64, density: f64, site: GeoPoint) -> Self {
        Self {
            asteroid_diameter,
            velocity,
            density,
            impact_angle: DEFAULT_IMPACT_ANGLE_DEG,
            target_type: TargetType::Land,
            latitude: site.lat,
            longitude: site.lng,
        }
    }

    /// Parameters for a catalog asteroid striking `site`.
    pub fn from_asteroid(asteroid: &AsteroidSpec, site: GeoPoint) -> Result<Self, ValidationError> {
        Ok(Self::new(
            asteroid.diameter,
            asteroid.velocity,
            asteroid.resolved_density()?,
            site,
        ))
    }

    pub fn with_angle(mut self, impact_angle: f64) -> Self {
        self.impact_angle = impact_angle;
        self
    }

    pub fn with_target(mut self, target_type: TargetType) -> Self {
        self.target_type = target_type;
        self
    }

    /// Impact point.
    pub fn site(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Check every domain constraint. No computation runs on invalid input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.asteroid_diameter > 0.0 && self.asteroid_diameter.is_finite()) {
            return Err(ValidationError::NonPositiveDiameter(self.asteroid_diameter));
        }
        if !(self.velocity > 0.0 && self.velocity.is_finite()) {
            return Err(ValidationError::NonPositiveVelocity(self.velocity));
        }
        if !(self.density > 0.0 && self.density.is_finite()) {
            return Err(ValidationError::NonPositiveDensity(self.density));
        }
        if !(self.impact_angle > 0.0 && self.impact_angle <= 90.0) {
            return Err(ValidationError::AngleOutOfRange(self.impact_angle));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

/// Overpressure thresholds with a reported airblast radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Overpressure {
    /// Reinforced concrete destroyed.
    Psi20,
    /// Most buildings collapse.
    Psi10,
    /// Residential structures destroyed.
    Psi5,
    /// Windows shatter.
    Psi1,
}

impl Overpressure {
    /// Highest to lowest pressure, i.e. innermost ring first.
    pub const ALL: &'static [Overpressure] = &[
        Overpressure::Psi20,
        Overpressure::Psi10,
        Overpressure::Psi5,
        Overpressure::Psi1,
    ];

    pub fn psi(self) -> f64 {
        match self {
            Overpressure::Psi20 => 20.0,
            Overpressure::Psi10 => 10.0,
            Overpressure::Psi5 => 5.0,
            Overpressure::Psi1 => 1.0,
        }
    }
}

/// Final crater dimensions (meters).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Crater {
    pub diameter: f64,
    pub depth: f64,
}

impl Crater {
    /// Surface footprint of the crater (km²).
    pub fn footprint_km2(&self) -> f64 {
        let radius_km = self.diameter / 2000.0;
        std::f64::consts::PI * radius_km * radius_km
    }
}

/// Airblast radii per overpressure threshold (km).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirblastRadii {
    pub psi20: f64,
    pub psi10: f64,
    pub psi5: f64,
    pub psi1: f64,
}

impl AirblastRadii {
    pub fn radius(&self, threshold: Overpressure) -> f64 {
        match threshold {
            Overpressure::Psi20 => self.psi20,
            Overpressure::Psi10 => self.psi10,
            Overpressure::Psi5 => self.psi5,
            Overpressure::Psi1 => self.psi1,
        }
    }
}

/// Tsunami generated by an ocean impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tsunami {
    /// Rim wave amplitude (m).
    pub max_wave_height: f64,
    /// Coastline reached by damaging waves (km).
    pub affected_coastline_length: f64,
}

/// Derived, read-only immediate effects of an impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmediateEffects {
    pub site: GeoPoint,
    pub target_type: TargetType,
    /// Impactor mass (kg).
    pub mass: f64,
    /// Kinetic energy (J).
    pub kinetic_energy: f64,
    /// Yield (Mt TNT).
    pub tnt_equivalent: f64,
    pub crater: Crater,
    pub airblast_radius: AirblastRadii,
    /// Third-degree burn radius (km).
    pub thermal_radius: f64,
    pub seismic_magnitude: f64,
    /// Present only for ocean impacts.
    pub tsunami: Option<Tsunami>,
    /// Rock excavated from the crater (kg).
    pub ejecta_mass: f64,
}

/// Compute immediate effects with the default calibration.
pub fn compute_immediate_effects(
    params: &ImpactParameters,
) -> Result<ImmediateEffects, ValidationError> {
    compute_immediate_effects_with(params, &EffectsCalibration::default())
}

/// Compute immediate effects.
///
/// Validates the parameters first; invalid input is rejected before any
/// computation. Every output field is finite and non-negative.
pub fn compute_immediate_effects_with(
    params: &ImpactParameters,
    cal: &EffectsCalibration,
) -> Result<ImmediateEffects, ValidationError> {
    params.validate()?;

    let props = resolve_physical_properties(params.asteroid_diameter, params.velocity, params.density)?;
    let tnt_equivalent = scaling::tnt_megatons(props.kinetic_energy);

    let coupled_mt = tnt_equivalent * scaling::coupling_efficiency(params.impact_angle, cal);
    let crater = scaling::crater(coupled_mt, cal);

    let airblast_radius = AirblastRadii {
        psi20: scaling::airblast_radius(tnt_equivalent, Overpressure::Psi20, &cal.airblast),
        psi10: scaling::airblast_radius(tnt_equivalent, Overpressure::Psi10, &cal.airblast),
        psi5: scaling::airblast_radius(tnt_equivalent, Overpressure::Psi5, &cal.airblast),
        psi1: scaling::airblast_radius(tnt_equivalent, Overpressure::Psi1, &cal.airblast),
    };

    let tsunami = params
        .target_type
        .is_water()
        .then(|| scaling::tsunami(&crater, tnt_equivalent, cal));

    let effects = ImmediateEffects {
        site: params.site(),
        target_type: params.target_type,
        mass: props.mass,
        kinetic_energy: props.kinetic_energy,
        tnt_equivalent,
        crater,
        airblast_radius,
        thermal_radius: scaling::thermal_radius(tnt_equivalent, cal),
        seismic_magnitude: scaling::seismic_magnitude(props.kinetic_energy, cal),
        tsunami,
        ejecta_mass: scaling::ejecta_mass(&crater, cal),
    };

    debug!(
        tnt_mt = effects.tnt_equivalent,
        crater_m = effects.crater.diameter,
        psi1_km = effects.airblast_radius.psi1,
        thermal_km = effects.thermal_radius,
        magnitude = effects.seismic_magnitude,
        target = params.target_type.name(),
        "computed immediate effects"
    );

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn benchmark() -> ImpactParameters {
        ImpactParameters::new(1000.0, 20.0, 3000.0, GeoPoint::new(40.7128, -74.006))
    }

    #[test]
    fn test_benchmark_energy_and_yield() {
        let effects = compute_immediate_effects(&benchmark()).expect("valid params");
        assert_relative_eq!(effects.kinetic_energy, 3.1416e20, max_relative = 1e-4);
        assert_relative_eq!(
            effects.tnt_equivalent,
            effects.kinetic_energy / 4.184e15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_benchmark_crater_is_several_km() {
        let effects = compute_immediate_effects(&benchmark()).expect("valid params");
        let km = effects.crater.diameter / 1000.0;
        assert!((3.0..30.0).contains(&km), "crater {km} km");
        assert_relative_eq!(effects.crater.depth, effects.crater.diameter / 5.0);
    }

    #[test]
    fn test_benchmark_seismic_magnitude() {
        let effects = compute_immediate_effects(&benchmark()).expect("valid params");
        assert!(
            (7.0..=8.0).contains(&effects.seismic_magnitude),
            "magnitude {}",
            effects.seismic_magnitude
        );
    }

    #[test]
    fn test_airblast_strictly_ordered() {
        let effects = compute_immediate_effects(&benchmark()).expect("valid params");
        let r = effects.airblast_radius;
        assert!(r.psi20 < r.psi10);
        assert!(r.psi10 < r.psi5);
        assert!(r.psi5 < r.psi1);
        assert!(r.psi1 > 4.0 * r.psi20, "1 psi ring should be far larger than 20 psi");
    }

    #[test]
    fn test_valid_but_enormous_impactor_saturates() {
        let params = ImpactParameters::new(1e110, 20.0, 3000.0, GeoPoint::new(0.0, 0.0))
            .with_target(TargetType::Water);
        assert_eq!(params.validate(), Ok(()));
        let effects = compute_immediate_effects(&params).expect("valid params");

        assert_eq!(effects.kinetic_energy, f64::MAX);
        for value in [
            effects.mass,
            effects.tnt_equivalent,
            effects.crater.diameter,
            effects.crater.depth,
            effects.thermal_radius,
            effects.seismic_magnitude,
            effects.ejecta_mass,
        ] {
            assert!(value.is_finite() && value >= 0.0, "{value}");
        }
        let r = effects.airblast_radius;
        assert!(r.psi20 < r.psi10 && r.psi10 < r.psi5 && r.psi5 < r.psi1);
        let tsunami = effects.tsunami.expect("ocean impact");
        assert!(tsunami.max_wave_height.is_finite());
    }

    #[test]
    fn test_tsunami_only_for_water() {
        let land = compute_immediate_effects(&benchmark()).expect("valid params");
        assert!(land.tsunami.is_none());

        let water = compute_immediate_effects(&benchmark().with_target(TargetType::Water))
            .expect("valid params");
        let tsunami = water.tsunami.expect("ocean impact must produce a tsunami");
        assert!(tsunami.max_wave_height > 0.0);
        assert!(tsunami.affected_coastline_length > 0.0);
    }

    #[test]
    fn test_oblique_impact_smaller_crater_same_blast() {
        let steep = compute_immediate_effects(&benchmark()).expect("valid params");
        let shallow = compute_immediate_effects(&benchmark().with_angle(15.0)).expect("valid params");
        assert!(shallow.crater.diameter < steep.crater.diameter);
        assert_eq!(shallow.airblast_radius, steep.airblast_radius);
        assert_eq!(shallow.thermal_radius, steep.thermal_radius);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let base = benchmark();
        assert!(matches!(
            compute_immediate_effects(&ImpactParameters { asteroid_diameter: 0.0, ..base }),
            Err(ValidationError::NonPositiveDiameter(_))
        ));
        assert!(matches!(
            compute_immediate_effects(&ImpactParameters { velocity: -3.0, ..base }),
            Err(ValidationError::NonPositiveVelocity(_))
        ));
        assert!(matches!(
            compute_immediate_effects(&ImpactParameters { density: 0.0, ..base }),
            Err(ValidationError::NonPositiveDensity(_))
        ));
        assert!(matches!(
            compute_immediate_effects(&base.with_angle(0.0)),
            Err(ValidationError::AngleOutOfRange(_))
        ));
        assert!(matches!(
            compute_immediate_effects(&base.with_angle(91.0)),
            Err(ValidationError::AngleOutOfRange(_))
        ));
        assert!(matches!(
            compute_immediate_effects(&ImpactParameters { latitude: 95.0, ..base }),
            Err(ValidationError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_vertical_impact_allowed() {
        assert!(compute_immediate_effects(&benchmark().with_angle(90.0)).is_ok());
    }

    #[test]
    fn test_from_asteroid_uses_composition_density() {
        let asteroid = AsteroidSpec::new("x", "X", 100.0, 17.0, crate::asteroid::Composition::Iron);
        let params = ImpactParameters::from_asteroid(&asteroid, GeoPoint::new(0.0, 0.0))
            .expect("valid asteroid");
        assert_eq!(params.density, 7800.0);
        assert_eq!(params.impact_angle, DEFAULT_IMPACT_ANGLE_DEG);
    }

    #[test]
    fn test_parameters_deserialize_with_defaults() {
        let json = r#"{"asteroidDiameter": 300, "velocity": 18, "density": 2600, "latitude": 1.5, "longitude": 2.5}"#;
        let params: ImpactParameters = serde_json::from_str(json).expect("valid json");
        assert_eq!(params.impact_angle, 45.0);
        assert_eq!(params.target_type, TargetType::Land);
    }
}
