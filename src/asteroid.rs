//! Asteroid records and physical property resolution.
//!
//! Catalog entries arrive as loosely specified records (density may be
//! missing). This module turns them into SI-consistent mass and kinetic
//! energy, the only physical inputs the effects calculator needs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::non_negative;

/// Bulk composition class of an asteroid.
///
/// Each class maps to a representative bulk density. `Default` is the
/// documented fallback for records whose composition is not known; it uses
/// the stony value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Composition {
    /// Ordinary chondrite (S-type).
    Stony,
    /// Nickel-iron (M-type).
    #[serde(alias = "metallic")]
    Iron,
    /// Carbon-rich, porous (C-type).
    Carbonaceous,
    /// Pallasites and mesosiderites.
    StonyIron,
    /// Differentiated basaltic crust (V-type).
    Basaltic,
    /// Unknown composition.
    #[default]
    #[serde(alias = "unknown")]
    Default,
}

impl Composition {
    /// All composition classes
    pub const ALL: &'static [Composition] = &[
        Composition::Stony,
        Composition::Iron,
        Composition::Carbonaceous,
        Composition::StonyIron,
        Composition::Basaltic,
        Composition::Default,
    ];

    /// Representative bulk density (kg/m³).
    pub const fn density(self) -> f64 {
        match self {
            Composition::Stony => 3000.0,
            Composition::Iron => 7800.0,
            Composition::Carbonaceous => 2000.0,
            Composition::StonyIron => 5000.0,
            Composition::Basaltic => 2900.0,
            Composition::Default => 3000.0,
        }
    }

    /// Canonical catalog tag
    pub fn tag(self) -> &'static str {
        match self {
            Composition::Stony => "stony",
            Composition::Iron => "iron",
            Composition::Carbonaceous => "carbonaceous",
            Composition::StonyIron => "stony-iron",
            Composition::Basaltic => "basaltic",
            Composition::Default => "default",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Composition {
    type Err = ValidationError;

    /// Parse a catalog tag. Unrecognised tags are rejected rather than mapped
    /// to `Default`, so a typo cannot silently change the density.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "stony" => Ok(Composition::Stony),
            "iron" | "metallic" => Ok(Composition::Iron),
            "carbonaceous" => Ok(Composition::Carbonaceous),
            "stony-iron" => Ok(Composition::StonyIron),
            "basaltic" => Ok(Composition::Basaltic),
            "default" | "unknown" => Ok(Composition::Default),
            _ => Err(ValidationError::UnknownComposition(s.to_string())),
        }
    }
}

/// An asteroid as supplied by the external catalog.
///
/// Immutable once selected; the engine never writes back to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidSpec {
    pub id: String,
    pub name: String,
    /// Diameter in meters.
    pub diameter: f64,
    /// Entry velocity in km/s.
    pub velocity: f64,
    /// Bulk density in kg/m³. Derived from `composition` when absent.
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub composition: Composition,
    /// Catalog threat tier. Display only, never used in physics.
    #[serde(default)]
    pub threat_level: Option<String>,
}

impl AsteroidSpec {
    /// Create a catalog entry whose density comes from its composition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diameter: f64,
        velocity: f64,
        composition: Composition,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            diameter,
            velocity,
            density: None,
            composition,
            threat_level: None,
        }
    }

    /// Override the composition-derived density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Density actually used for this asteroid (kg/m³).
    pub fn resolved_density(&self) -> Result<f64, ValidationError> {
        resolve_density(self.density, self.composition)
    }

    /// Mass and kinetic energy of this asteroid.
    pub fn physical_properties(&self) -> Result<PhysicalProperties, ValidationError> {
        resolve_physical_properties(self.diameter, self.velocity, self.resolved_density()?)
    }
}

/// SI-consistent physical quantities of an impactor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperties {
    /// Mass in kilograms.
    pub mass: f64,
    /// Kinetic energy at impact in joules.
    pub kinetic_energy: f64,
}

/// Pick the density for a record: an explicit value wins, otherwise the
/// composition table. An explicit non-positive density is an error.
pub fn resolve_density(
    density: Option<f64>,
    composition: Composition,
) -> Result<f64, ValidationError> {
    match density {
        Some(d) if d > 0.0 && d.is_finite() => Ok(d),
        Some(d) => Err(ValidationError::NonPositiveDensity(d)),
        None => Ok(composition.density()),
    }
}

/// Compute mass and kinetic energy of a spherical impactor.
///
/// mass = ρ × (4/3)π(d/2)³, E = ½ m v² with v converted from km/s to m/s.
///
/// # Arguments
/// * `diameter` - Diameter in meters
/// * `velocity` - Velocity in km/s
/// * `density` - Bulk density in kg/m³
pub fn resolve_physical_properties(
    diameter: f64,
    velocity: f64,
    density: f64,
) -> Result<PhysicalProperties, ValidationError> {
    if !(diameter > 0.0 && diameter.is_finite()) {
        return Err(ValidationError::NonPositiveDiameter(diameter));
    }
    if !(velocity > 0.0 && velocity.is_finite()) {
        return Err(ValidationError::NonPositiveVelocity(velocity));
    }
    if !(density > 0.0 && density.is_finite()) {
        return Err(ValidationError::NonPositiveDensity(density));
    }

    let radius = diameter / 2.0;
    let volume = 4.0 / 3.0 * std::f64::consts::PI * radius.powi(3);
    let mass = non_negative(density * volume, "impactor mass");

    let v = velocity * 1000.0;
    let kinetic_energy = non_negative(0.5 * mass * v * v, "kinetic energy");

    Ok(PhysicalProperties {
        mass,
        kinetic_energy,
    })
}
