//! Property-based tests for the temporal projector.
//!
//! Impacts range from house-sized boulders to planet-sterilising bodies; the
//! exposure is the shared fixture set around the impact site.

use proptest::prelude::*;

use super::{TimelineSnapshot, project_at};
use crate::effects::{ImmediateEffects, ImpactParameters, compute_immediate_effects};
use crate::exposure::{ExposureSet, aggregate_exposure};
use crate::geo::GeoPoint;
use crate::test_utils::fixtures;
use crate::types::TargetType;

fn scenario_strategy() -> impl Strategy<Value = (ImmediateEffects, ExposureSet)> {
    (5.0f64..50_000.0, 11.0f64..72.0, 1000.0f64..8000.0, 1.0f64..=90.0, prop::bool::ANY).prop_map(
        |(diameter, velocity, density, angle, water)| {
            let target = if water { TargetType::Water } else { TargetType::Land };
            let params = ImpactParameters::new(diameter, velocity, density, fixtures::impact_site())
                .with_angle(angle)
                .with_target(target);
            let effects = compute_immediate_effects(&params).expect("valid params");
            let exposure = aggregate_exposure(
                fixtures::impact_site(),
                &effects,
                &fixtures::countries(),
                &fixtures::infrastructure(),
            );
            (effects, exposure)
        },
    )
}

fn assert_bounded(s: &TimelineSnapshot) -> Result<(), TestCaseError> {
    prop_assert!(s.casualties.is_finite() && s.casualties >= 0.0, "{:?}", s);
    prop_assert!(s.displaced.is_finite() && s.displaced >= 0.0, "{:?}", s);
    prop_assert!(s.temperature_anomaly.is_finite() && s.temperature_anomaly <= 0.0, "{:?}", s);
    prop_assert!((0.0..=100.0).contains(&s.habitable_area_fraction), "{:?}", s);
    prop_assert!((0.0..=100.0).contains(&s.food_production_index), "{:?}", s);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every indicator stays finite and inside its documented range.
    #[test]
    fn prop_indicators_bounded(
        (effects, exposure) in scenario_strategy(),
        t in -0.5f64..=50.0,
    ) {
        assert_bounded(&project_at(&effects, &exposure, t))?;
    }

    /// The pre-impact baseline does not depend on the impact.
    #[test]
    fn prop_baseline_before_impact((effects, exposure) in scenario_strategy()) {
        let s = project_at(&effects, &exposure, -0.5);
        prop_assert_eq!(s.casualties, 0.0);
        prop_assert_eq!(s.displaced, 0.0);
        prop_assert_eq!(s.temperature_anomaly, 0.0);
        prop_assert_eq!(s.habitable_area_fraction, 100.0);
        prop_assert_eq!(s.food_production_index, 100.0);
    }

    /// Re-querying an offset yields a bit-identical snapshot.
    #[test]
    fn prop_deterministic((effects, exposure) in scenario_strategy(), t in -0.5f64..=50.0) {
        let a = project_at(&effects, &exposure, t);
        let b = project_at(&effects, &exposure, t);
        prop_assert_eq!(a, b);
    }

    /// Cumulative casualties never decrease after impact.
    #[test]
    fn prop_casualties_non_decreasing(
        (effects, exposure) in scenario_strategy(),
        t in 0.0f64..49.0,
        dt in 0.0f64..1.0,
    ) {
        let earlier = project_at(&effects, &exposure, t);
        let later = project_at(&effects, &exposure, t + dt);
        prop_assert!(later.casualties >= earlier.casualties);
    }

    /// Away from the impact instant, small steps in time produce small
    /// changes in every indicator.
    #[test]
    fn prop_continuous_away_from_impact(
        (effects, exposure) in scenario_strategy(),
        t in 0.01f64..49.0,
    ) {
        let h = 1e-9;
        let a = project_at(&effects, &exposure, t);
        let b = project_at(&effects, &exposure, t + h);
        let scale = |x: f64| x.abs().max(1.0);
        prop_assert!((a.casualties - b.casualties).abs() <= 1e-5 * scale(a.casualties));
        prop_assert!((a.displaced - b.displaced).abs() <= 1e-5 * scale(a.displaced));
        prop_assert!((a.temperature_anomaly - b.temperature_anomaly).abs() <= 1e-5);
        prop_assert!((a.habitable_area_fraction - b.habitable_area_fraction).abs() <= 1e-5);
        prop_assert!((a.food_production_index - b.food_production_index).abs() <= 1e-5);
    }

    /// The first days carry the fastest ramps (evacuation, secondary deaths,
    /// climate onset); steps scaled to the offset stay continuous there too.
    #[test]
    fn prop_continuous_in_first_days(
        (effects, exposure) in scenario_strategy(),
        t in 1e-6f64..0.01,
    ) {
        let h = t * 1e-8;
        let a = project_at(&effects, &exposure, t);
        let b = project_at(&effects, &exposure, t + h);
        let scale = |x: f64| x.abs().max(1.0);
        prop_assert!((a.casualties - b.casualties).abs() <= 1e-5 * scale(a.casualties));
        prop_assert!((a.displaced - b.displaced).abs() <= 1e-5 * scale(a.displaced));
        prop_assert!((a.temperature_anomaly - b.temperature_anomaly).abs() <= 1e-5);
        prop_assert!((a.habitable_area_fraction - b.habitable_area_fraction).abs() <= 1e-5);
        prop_assert!((a.food_production_index - b.food_production_index).abs() <= 1e-5);
    }

    /// Anyone killed means someone is still displaced decades later and part
    /// of the region stays uninhabitable.
    #[test]
    fn prop_lasting_scars_when_casualties((effects, exposure) in scenario_strategy(), t in 0.001f64..=50.0) {
        let s = project_at(&effects, &exposure, t);
        if s.casualties > 0.0 {
            prop_assert!(s.displaced > 0.0, "{:?}", s);
            prop_assert!(s.habitable_area_fraction < 100.0, "{:?}", s);
        }
    }
}

/// The most energetic impact the effects calculator accepts in practice still
/// projects finite values at the far end of the domain.
#[test]
fn test_extreme_energy_far_future() {
    let params = ImpactParameters::new(500_000.0, 72.0, 8000.0, GeoPoint::new(0.0, 0.0))
        .with_target(TargetType::Water);
    let effects = compute_immediate_effects(&params).expect("valid params");
    let exposure = aggregate_exposure(
        effects.site,
        &effects,
        &fixtures::countries(),
        &fixtures::infrastructure(),
    );
    for t in [-0.5, 0.0, 1e-6, 1.0, 10.0, 50.0] {
        let s = project_at(&effects, &exposure, t);
        assert_bounded(&s).expect("bounded");
    }
}
