//! Property-based tests for the immediate effects calculator.
//!
//! These tests verify invariants across the whole valid parameter space,
//! from metre-scale boulders to dinosaur killers.

use proptest::prelude::*;

use super::{ImpactParameters, compute_immediate_effects};
use crate::geo::GeoPoint;
use crate::types::TargetType;

fn params_strategy() -> impl Strategy<Value = ImpactParameters> {
    (
        1.0f64..20_000.0,
        11.0f64..72.0,
        1000.0f64..8000.0,
        0.5f64..=90.0,
        prop::bool::ANY,
        -90.0f64..=90.0,
        -180.0f64..=180.0,
    )
        .prop_map(|(diameter, velocity, density, angle, water, lat, lng)| {
            let target = if water { TargetType::Water } else { TargetType::Land };
            ImpactParameters::new(diameter, velocity, density, GeoPoint::new(lat, lng))
                .with_angle(angle)
                .with_target(target)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Two calls with identical input produce identical output.
    #[test]
    fn prop_deterministic(params in params_strategy()) {
        let a = compute_immediate_effects(&params).expect("valid params");
        let b = compute_immediate_effects(&params).expect("valid params");
        prop_assert_eq!(a, b);
    }

    /// radius(20 psi) < radius(10 psi) < radius(5 psi) < radius(1 psi)
    #[test]
    fn prop_airblast_strictly_ordered(params in params_strategy()) {
        let r = compute_immediate_effects(&params).expect("valid params").airblast_radius;
        prop_assert!(r.psi20 < r.psi10, "{:?}", r);
        prop_assert!(r.psi10 < r.psi5, "{:?}", r);
        prop_assert!(r.psi5 < r.psi1, "{:?}", r);
    }

    /// Crater grows with diameter, other parameters held fixed.
    #[test]
    fn prop_crater_monotone_in_diameter(params in params_strategy(), factor in 1.01f64..5.0) {
        let small = compute_immediate_effects(&params).expect("valid params");
        let bigger = ImpactParameters { asteroid_diameter: params.asteroid_diameter * factor, ..params };
        let large = compute_immediate_effects(&bigger).expect("valid params");
        prop_assert!(large.crater.diameter > small.crater.diameter);
    }

    /// Crater grows with velocity, other parameters held fixed.
    #[test]
    fn prop_crater_monotone_in_velocity(params in params_strategy(), factor in 1.01f64..3.0) {
        let slow = compute_immediate_effects(&params).expect("valid params");
        let faster = ImpactParameters { velocity: params.velocity * factor, ..params };
        let fast = compute_immediate_effects(&faster).expect("valid params");
        prop_assert!(fast.crater.diameter > slow.crater.diameter);
    }

    /// Tsunami fields present if and only if the target is water.
    #[test]
    fn prop_tsunami_iff_water(params in params_strategy()) {
        let effects = compute_immediate_effects(&params).expect("valid params");
        prop_assert_eq!(effects.tsunami.is_some(), params.target_type.is_water());
    }

    /// All reported quantities are finite and non-negative.
    #[test]
    fn prop_outputs_finite_non_negative(params in params_strategy()) {
        let e = compute_immediate_effects(&params).expect("valid params");
        let mut values = vec![
            e.mass, e.kinetic_energy, e.tnt_equivalent, e.crater.diameter, e.crater.depth,
            e.airblast_radius.psi20, e.airblast_radius.psi10, e.airblast_radius.psi5,
            e.airblast_radius.psi1, e.thermal_radius, e.seismic_magnitude, e.ejecta_mass,
        ];
        if let Some(t) = e.tsunami {
            values.push(t.max_wave_height);
            values.push(t.affected_coastline_length);
        }
        for v in values {
            prop_assert!(v.is_finite() && v >= 0.0, "bad value {}", v);
        }
        prop_assert!((0.0..=10.0).contains(&e.seismic_magnitude));
    }
}
