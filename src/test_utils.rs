//! Test utilities for impact assessment tests.
//!
//! Provides a benchmark impact on New York City and a small geo dataset
//! arranged so that every exposure tier is populated.

/// Fixtures for impacts and geo datasets.
pub mod fixtures {
    use crate::effects::{ImmediateEffects, ImpactParameters, compute_immediate_effects};
    use crate::exposure::{ExposureSet, aggregate_exposure};
    use crate::geo::{CountryData, GeoPoint, InfrastructureKind, InfrastructurePoint};
    use crate::types::TargetType;

    /// Lower Manhattan.
    pub fn impact_site() -> GeoPoint {
        GeoPoint::new(40.7128, -74.006)
    }

    /// 1 km stony body at 20 km/s, 45°, on land.
    pub fn benchmark_params() -> ImpactParameters {
        ImpactParameters::new(1000.0, 20.0, 3000.0, impact_site())
    }

    pub fn benchmark_effects() -> ImmediateEffects {
        compute_immediate_effects(&benchmark_params()).expect("benchmark parameters are valid")
    }

    /// The benchmark body striking the sea off the same coast.
    pub fn ocean_effects() -> ImmediateEffects {
        let params = benchmark_params().with_target(TargetType::Water);
        compute_immediate_effects(&params).expect("benchmark parameters are valid")
    }

    /// Regions at increasing distance from the impact site: one per tier for
    /// the benchmark effects, plus one on the far side of the planet.
    pub fn countries() -> Vec<CountryData> {
        vec![
            CountryData::new("Ground Zero", impact_site(), 8.3e6, 11_000.0),
            CountryData::new("Trenton Belt", GeoPoint::new(40.22, -74.76), 9.0e5, 3_000.0),
            CountryData::new("Delaware Valley", GeoPoint::new(39.95, -75.165), 1.6e6, 4_500.0),
            CountryData::new("New England", GeoPoint::new(42.36, -71.06), 4.9e6, 5_400.0),
            CountryData::new("Great Lakes", GeoPoint::new(41.88, -87.63), 2.7e6, 4_600.0),
            CountryData::new("Antipodes", GeoPoint::new(-40.7128, 105.994), 1.0e6, 10.0),
        ]
    }

    pub fn infrastructure() -> Vec<InfrastructurePoint> {
        vec![
            InfrastructurePoint::new(
                "Hudson Grid",
                InfrastructureKind::Power,
                GeoPoint::new(40.75, -73.99),
                2_000.0,
            ),
            InfrastructurePoint::new(
                "Turnpike",
                InfrastructureKind::Transport,
                GeoPoint::new(40.22, -74.76),
                120.0,
            ),
            InfrastructurePoint::new(
                "Catskill Aqueduct",
                InfrastructureKind::Water,
                GeoPoint::new(41.0, -74.1),
                4.0e6,
            ),
            InfrastructurePoint::new(
                "Joint Base",
                InfrastructureKind::Military,
                GeoPoint::new(40.0, -74.6),
                1.0,
            ),
            InfrastructurePoint::new(
                "General Hospital",
                InfrastructureKind::Civilian,
                GeoPoint::new(42.36, -71.06),
                900.0,
            ),
            InfrastructurePoint::new(
                "Midwest Relay",
                InfrastructureKind::Communications,
                GeoPoint::new(41.88, -87.63),
                50.0,
            ),
        ]
    }

    pub fn benchmark_exposure() -> ExposureSet {
        aggregate_exposure(
            impact_site(),
            &benchmark_effects(),
            &countries(),
            &infrastructure(),
        )
    }
}
