//! Configured entry point running the whole pipeline.

use serde::Serialize;
use tracing::info;

use crate::asteroid::AsteroidSpec;
use crate::config::EngineConfig;
use crate::effects::{ImmediateEffects, ImpactParameters, compute_immediate_effects_with};
use crate::error::ValidationError;
use crate::exposure::{ExposureSet, aggregate_exposure_with};
use crate::geo::{CountryData, GeoPoint, GeoSnapshot, InfrastructurePoint};
use crate::projection::{TimelineSnapshot, project_at_with};
use crate::timeline::{Timeline, build_timeline_with};
use crate::types::TargetType;

/// Everything the engine derives for one impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub parameters: ImpactParameters,
    pub effects: ImmediateEffects,
    pub exposure: ExposureSet,
    pub timeline: Timeline,
}

/// The impact engine with its calibration.
///
/// Holds no state besides the configuration; every method is a pure
/// function of its arguments, so one engine can serve any number of callers.
#[derive(Clone, Debug, Default)]
pub struct ImpactEngine {
    config: EngineConfig,
}

impl ImpactEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute_immediate_effects(
        &self,
        params: &ImpactParameters,
    ) -> Result<ImmediateEffects, ValidationError> {
        compute_immediate_effects_with(params, &self.config.effects)
    }

    pub fn aggregate_exposure(
        &self,
        point: GeoPoint,
        effects: &ImmediateEffects,
        countries: &[CountryData],
        infrastructure: &[InfrastructurePoint],
    ) -> ExposureSet {
        aggregate_exposure_with(point, effects, countries, infrastructure, &self.config.exposure)
    }

    pub fn project_at(
        &self,
        effects: &ImmediateEffects,
        exposure: &ExposureSet,
        time_years: f64,
    ) -> TimelineSnapshot {
        project_at_with(effects, exposure, time_years, &self.config.projection)
    }

    pub fn build_timeline(&self, effects: &ImmediateEffects, exposure: &ExposureSet) -> Timeline {
        build_timeline_with(effects, exposure, &self.config.projection)
    }

    /// Run effects, exposure and timeline for one impact.
    ///
    /// The geo snapshot is read once; a refreshed snapshot published while
    /// this runs does not affect the result.
    pub fn assess(
        &self,
        params: &ImpactParameters,
        geo: &GeoSnapshot,
    ) -> Result<ImpactAssessment, ValidationError> {
        let effects = self.compute_immediate_effects(params)?;
        let exposure = self.aggregate_exposure(
            params.site(),
            &effects,
            geo.countries(),
            geo.infrastructure(),
        );
        let timeline = self.build_timeline(&effects, &exposure);

        info!(
            tnt_mt = effects.tnt_equivalent,
            crater_km = effects.crater.diameter / 1000.0,
            casualties = exposure.immediate_casualties(),
            skipped = exposure.skipped.len(),
            "impact assessed at ({:.3}, {:.3})",
            params.latitude,
            params.longitude
        );

        Ok(ImpactAssessment {
            parameters: *params,
            effects,
            exposure,
            timeline,
        })
    }

    /// Assess a catalog asteroid striking `site` at the default angle.
    pub fn assess_asteroid(
        &self,
        asteroid: &AsteroidSpec,
        site: GeoPoint,
        target_type: TargetType,
        geo: &GeoSnapshot,
    ) -> Result<ImpactAssessment, ValidationError> {
        let params = ImpactParameters::from_asteroid(asteroid, site)?.with_target(target_type);
        self.assess(&params, geo)
    }
}
