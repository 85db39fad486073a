//! Aftermath - Asteroid Impact Effects & Temporal Projection
//!
//! A library crate turning an asteroid's physical parameters and an impact
//! site into immediate physical effects, geographic exposure and a projection
//! of human, climate and ecological consequences over time.
//!
//! The free functions use the default calibration; [`ImpactEngine`] carries
//! a caller-supplied [`EngineConfig`].

pub mod asteroid;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod exposure;
pub mod geo;
pub mod projection;
pub mod scenarios;
pub mod time;
pub mod timeline;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use asteroid::{AsteroidSpec, Composition, PhysicalProperties, resolve_physical_properties};
pub use config::EngineConfig;
pub use effects::{ImmediateEffects, ImpactParameters, compute_immediate_effects};
pub use engine::{ImpactAssessment, ImpactEngine};
pub use error::{ConfigError, DataUnavailable, ValidationError};
pub use exposure::{ExposureSet, ExposureTier, aggregate_exposure};
pub use geo::{CountryData, GeoPoint, GeoSnapshot, InfrastructureKind, InfrastructurePoint};
pub use projection::{TimelineSnapshot, project_at};
pub use time::{Checkpoint, TimeBand};
pub use timeline::{Timeline, build_timeline};
pub use types::TargetType;
