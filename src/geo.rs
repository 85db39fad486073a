//! Geographic points and the externally owned geo datasets.
//!
//! Countries and infrastructure are modelled as points. Distances are
//! great-circle distances on a spherical Earth.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{DEG_TO_RAD, EARTH_RADIUS_KM};

/// A position on Earth's surface (degrees).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if the coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle (haversine) distance to another point in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat * DEG_TO_RAD;
        let lat2 = other.lat * DEG_TO_RAD;
        let d_lat = lat2 - lat1;
        let d_lng = (other.lng - self.lng) * DEG_TO_RAD;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        // Rounding can push `a` a hair above 1 for antipodal points
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
        EARTH_RADIUS_KM * c
    }
}

/// A country, aggregated at its centroid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryData {
    pub name: String,
    #[serde(default)]
    pub centroid: Option<GeoPoint>,
    pub population: f64,
    /// People per km². Zero when unknown.
    #[serde(default)]
    pub population_density: f64,
}

impl CountryData {
    pub fn new(name: impl Into<String>, centroid: GeoPoint, population: f64, density: f64) -> Self {
        Self {
            name: name.into(),
            centroid: Some(centroid),
            population,
            population_density: density,
        }
    }
}

/// Category of an infrastructure point. Decides which effect disrupts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureKind {
    Power,
    Water,
    Transport,
    Communications,
    Military,
    Civilian,
}

impl InfrastructureKind {
    pub const ALL: &'static [InfrastructureKind] = &[
        InfrastructureKind::Power,
        InfrastructureKind::Water,
        InfrastructureKind::Transport,
        InfrastructureKind::Communications,
        InfrastructureKind::Military,
        InfrastructureKind::Civilian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InfrastructureKind::Power => "power",
            InfrastructureKind::Water => "water",
            InfrastructureKind::Transport => "transport",
            InfrastructureKind::Communications => "communications",
            InfrastructureKind::Military => "military",
            InfrastructureKind::Civilian => "civilian",
        }
    }
}

/// A single infrastructure asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructurePoint {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InfrastructureKind,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Capacity or value metric in dataset units (MW, people served, ...).
    #[serde(default)]
    pub capacity: f64,
}

impl InfrastructurePoint {
    pub fn new(
        name: impl Into<String>,
        kind: InfrastructureKind,
        location: GeoPoint,
        capacity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            location: Some(location),
            capacity,
        }
    }
}

/// An immutable, cheaply clonable version of the geo datasets.
///
/// A computation holds its own clone, so swapping in a refreshed snapshot
/// while it runs never exposes a half-updated dataset.
#[derive(Clone, Debug, Default)]
pub struct GeoSnapshot {
    countries: Arc<[CountryData]>,
    infrastructure: Arc<[InfrastructurePoint]>,
}

impl GeoSnapshot {
    pub fn new(countries: Vec<CountryData>, infrastructure: Vec<InfrastructurePoint>) -> Self {
        Self {
            countries: countries.into(),
            infrastructure: infrastructure.into(),
        }
    }

    /// Parse the country and infrastructure datasets from JSON arrays.
    pub fn from_json(countries: &str, infrastructure: &str) -> Result<Self, serde_json::Error> {
        let countries: Vec<CountryData> = serde_json::from_str(countries)?;
        let infrastructure: Vec<InfrastructurePoint> = serde_json::from_str(infrastructure)?;
        Ok(Self::new(countries, infrastructure))
    }

    pub fn countries(&self) -> &[CountryData] {
        &self.countries
    }

    pub fn infrastructure(&self) -> &[InfrastructurePoint] {
        &self.infrastructure
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.infrastructure.is_empty()
    }
}
