//! Common test utilities for integration tests.

#![allow(dead_code)]

use aftermath::{
    CountryData, GeoPoint, ImmediateEffects, ImpactParameters, InfrastructureKind,
    InfrastructurePoint, TimelineSnapshot, compute_immediate_effects,
};

/// Tokyo, used as the impact site for dataset tests.
pub const TOKYO: GeoPoint = GeoPoint::new(35.6762, 139.6503);

/// A 1 km stony body at 20 km/s, 45°, onto land at `site`.
pub fn one_km_impact(site: GeoPoint) -> ImpactParameters {
    ImpactParameters::new(1000.0, 20.0, 3000.0, site)
}

pub fn effects(params: &ImpactParameters) -> ImmediateEffects {
    compute_immediate_effects(params).expect("test parameters are valid")
}

/// Four Pacific-rim regions at increasing distance from Tokyo.
pub fn pacific_countries() -> Vec<CountryData> {
    vec![
        CountryData::new("Kanto", TOKYO, 4.3e7, 1_300.0),
        CountryData::new("Osaka", GeoPoint::new(34.6937, 135.5023), 8.8e6, 4_600.0),
        CountryData::new("Seoul", GeoPoint::new(37.5665, 126.978), 9.7e6, 16_000.0),
        CountryData::new("Lima", GeoPoint::new(-12.0464, -77.0428), 1.0e7, 3_000.0),
    ]
}

pub fn pacific_infrastructure() -> Vec<InfrastructurePoint> {
    vec![
        InfrastructurePoint::new("Tokyo Bay Power", InfrastructureKind::Power, GeoPoint::new(35.5, 139.8), 5_000.0),
        InfrastructurePoint::new("Narita", InfrastructureKind::Transport, GeoPoint::new(35.772, 140.393), 40.0),
        InfrastructurePoint::new("Yokosuka", InfrastructureKind::Military, GeoPoint::new(35.283, 139.667), 1.0),
    ]
}

/// Assert every snapshot indicator lies in its documented range.
pub fn assert_snapshot_bounded(s: &TimelineSnapshot) {
    assert!(s.casualties.is_finite() && s.casualties >= 0.0, "{s:?}");
    assert!(s.displaced.is_finite() && s.displaced >= 0.0, "{s:?}");
    assert!(s.temperature_anomaly.is_finite() && s.temperature_anomaly <= 0.0, "{s:?}");
    assert!((0.0..=100.0).contains(&s.habitable_area_fraction), "{s:?}");
    assert!((0.0..=100.0).contains(&s.food_production_index), "{s:?}");
}
