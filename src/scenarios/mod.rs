//! Reference impact events.
//!
//! Historical and benchmark impacts with their published observations, used
//! to sanity-check the calibration and as ready-made inputs for the CLI:
//! - Chelyabinsk airburst (2013)
//! - Tunguska event (1908)
//! - Barringer / Meteor Crater
//! - Apophis-class ocean impact
//! - 1 km benchmark
//! - Chicxulub

pub mod presets;

use crate::asteroid::{AsteroidSpec, Composition};
use crate::effects::ImpactParameters;
use crate::geo::GeoPoint;
use crate::types::TargetType;

pub use presets::REFERENCE_EVENTS;

/// A predefined impact with, where known, what was actually observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceEvent {
    /// Unique identifier, used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the event.
    pub description: &'static str,
    /// Impactor diameter (m).
    pub diameter: f64,
    /// Entry velocity (km/s).
    pub velocity: f64,
    pub composition: Composition,
    /// Degrees from horizontal.
    pub impact_angle: f64,
    pub target: TargetType,
    pub site: GeoPoint,
    /// Published yield estimates (Mt), low to high.
    pub observed_yield_mt: Option<(f64, f64)>,
    /// Observed final crater diameter (km).
    pub observed_crater_km: Option<f64>,
}

impl ReferenceEvent {
    /// The impactor as a catalog record.
    pub fn asteroid(&self) -> AsteroidSpec {
        AsteroidSpec::new(self.id, self.name, self.diameter, self.velocity, self.composition)
    }

    /// Full impact parameters for the event.
    pub fn parameters(&self) -> ImpactParameters {
        ImpactParameters::new(self.diameter, self.velocity, self.composition.density(), self.site)
            .with_angle(self.impact_angle)
            .with_target(self.target)
    }
}

/// Look up a reference event by id.
pub fn find(id: &str) -> Option<&'static ReferenceEvent> {
    REFERENCE_EVENTS.iter().copied().find(|e| e.id == id)
}
