//! Reference event definitions.
//!
//! Impactor properties are the commonly cited reconstructions; observations
//! span the published estimates.

use crate::asteroid::Composition;
use crate::geo::GeoPoint;
use crate::types::TargetType;

use super::ReferenceEvent;

/// All reference events, smallest first.
pub static REFERENCE_EVENTS: &[&ReferenceEvent] = &[
    &CHELYABINSK,
    &BARRINGER,
    &TUNGUSKA,
    &APOPHIS_OCEAN,
    &BENCHMARK_1KM,
    &CHICXULUB,
];

/// Chelyabinsk, 15 February 2013.
///
/// A ~19 m chondrite entering at a shallow angle. It exploded ~30 km up;
/// the injuries were caused by the airblast shattering windows.
pub static CHELYABINSK: ReferenceEvent = ReferenceEvent {
    id: "chelyabinsk",
    name: "Chelyabinsk Airburst",
    description: "19 m stony body at 19 km/s, shallow entry over the southern Urals (2013).",
    diameter: 19.0,
    velocity: 19.0,
    composition: Composition::Stony,
    impact_angle: 18.0,
    target: TargetType::Land,
    site: GeoPoint::new(55.15, 61.41),
    observed_yield_mt: Some((0.4, 0.6)),
    observed_crater_km: None,
};

/// Tunguska, 30 June 1908.
///
/// Flattened ~2000 km² of Siberian forest without leaving a crater.
pub static TUNGUSKA: ReferenceEvent = ReferenceEvent {
    id: "tunguska",
    name: "Tunguska Event",
    description: "~60 m stony body over the Podkamennaya Tunguska river (1908).",
    diameter: 60.0,
    velocity: 15.0,
    composition: Composition::Stony,
    impact_angle: 35.0,
    target: TargetType::Land,
    site: GeoPoint::new(60.886, 101.894),
    observed_yield_mt: Some((3.0, 15.0)),
    observed_crater_km: None,
};

/// Barringer (Meteor Crater), Arizona, ~50,000 years ago.
pub static BARRINGER: ReferenceEvent = ReferenceEvent {
    id: "barringer",
    name: "Barringer Crater",
    description: "~50 m iron meteorite that excavated Meteor Crater, Arizona.",
    diameter: 50.0,
    velocity: 12.8,
    composition: Composition::Iron,
    impact_angle: 45.0,
    target: TargetType::Land,
    site: GeoPoint::new(35.027, -111.022),
    observed_yield_mt: Some((2.5, 20.0)),
    observed_crater_km: Some(1.186),
};

/// Hypothetical ocean strike by an Apophis-sized body (~1500 Mt).
pub static APOPHIS_OCEAN: ReferenceEvent = ReferenceEvent {
    id: "apophis-ocean",
    name: "Apophis-class Ocean Impact",
    description: "370 m stony body at 12.6 km/s into the central Atlantic.",
    diameter: 370.0,
    velocity: 12.6,
    composition: Composition::Stony,
    impact_angle: 45.0,
    target: TargetType::Water,
    site: GeoPoint::new(30.0, -40.0),
    observed_yield_mt: None,
    observed_crater_km: None,
};

/// 1 km stony body at 20 km/s on New York City.
pub static BENCHMARK_1KM: ReferenceEvent = ReferenceEvent {
    id: "benchmark-1km",
    name: "1 km Benchmark",
    description: "1 km stony body at 20 km/s, 45° onto New York City.",
    diameter: 1000.0,
    velocity: 20.0,
    composition: Composition::Stony,
    impact_angle: 45.0,
    target: TargetType::Land,
    site: GeoPoint::new(40.7128, -74.006),
    observed_yield_mt: None,
    observed_crater_km: None,
};

/// Chicxulub, 66 million years ago. Ended the Cretaceous.
pub static CHICXULUB: ReferenceEvent = ReferenceEvent {
    id: "chicxulub",
    name: "Chicxulub Impactor",
    description: "~10 km body into the shallow sea off the Yucatán peninsula.",
    diameter: 10_000.0,
    velocity: 20.0,
    composition: Composition::Stony,
    impact_angle: 60.0,
    target: TargetType::Water,
    site: GeoPoint::new(21.4, -89.5),
    observed_yield_mt: Some((1.0e7, 1.0e9)),
    observed_crater_km: Some(180.0),
};
