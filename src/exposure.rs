//! Geographic aggregation of immediate effects.
//!
//! Every country and infrastructure point is reduced to its great-circle
//! distance from the impact and classified into an exposure tier by comparing
//! that distance with the airblast and thermal radii.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ExposureCalibration, TierSeverity};
use crate::effects::{ImmediateEffects, Overpressure};
use crate::error::DataUnavailable;
use crate::geo::{CountryData, GeoPoint, InfrastructureKind, InfrastructurePoint};

/// Severity class of a location, worst first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExposureTier {
    /// Inside the 20 psi ring.
    Destroyed,
    /// Between 20 and 10 psi.
    Severe,
    /// Between 10 and 5 psi.
    Moderate,
    /// Between 5 and 1 psi.
    Light,
    /// Beyond 1 psi but inside the thermal radius.
    ThermalOnly,
    Unaffected,
}

impl ExposureTier {
    pub const ALL: &'static [ExposureTier] = &[
        ExposureTier::Destroyed,
        ExposureTier::Severe,
        ExposureTier::Moderate,
        ExposureTier::Light,
        ExposureTier::ThermalOnly,
        ExposureTier::Unaffected,
    ];

    /// Classify a distance (km) against the effect radii.
    pub fn classify(distance_km: f64, effects: &ImmediateEffects) -> ExposureTier {
        let r = &effects.airblast_radius;
        if distance_km <= r.psi20 {
            ExposureTier::Destroyed
        } else if distance_km <= r.psi10 {
            ExposureTier::Severe
        } else if distance_km <= r.psi5 {
            ExposureTier::Moderate
        } else if distance_km <= r.psi1 {
            ExposureTier::Light
        } else if distance_km <= effects.thermal_radius {
            ExposureTier::ThermalOnly
        } else {
            ExposureTier::Unaffected
        }
    }

    /// Fraction of the tier's population killed at impact.
    pub fn severity(self, severity: &TierSeverity) -> f64 {
        match self {
            ExposureTier::Destroyed => severity.destroyed,
            ExposureTier::Severe => severity.severe,
            ExposureTier::Moderate => severity.moderate,
            ExposureTier::Light => severity.light,
            ExposureTier::ThermalOnly => severity.thermal_only,
            ExposureTier::Unaffected => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExposureTier::Destroyed => "destroyed",
            ExposureTier::Severe => "severe",
            ExposureTier::Moderate => "moderate",
            ExposureTier::Light => "light",
            ExposureTier::ThermalOnly => "thermal only",
            ExposureTier::Unaffected => "unaffected",
        }
    }
}

/// Effect radius that decides whether an infrastructure point is disrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoverningZone {
    Thermal,
    Blast(Overpressure),
}

impl GoverningZone {
    /// Zone governing each infrastructure kind. Grid and telecom lines fail
    /// across the whole thermal footprint; hardened sites need heavy
    /// overpressure.
    pub fn for_kind(kind: InfrastructureKind) -> GoverningZone {
        match kind {
            InfrastructureKind::Power | InfrastructureKind::Communications => GoverningZone::Thermal,
            InfrastructureKind::Transport | InfrastructureKind::Water => {
                GoverningZone::Blast(Overpressure::Psi5)
            }
            InfrastructureKind::Military => GoverningZone::Blast(Overpressure::Psi10),
            InfrastructureKind::Civilian => GoverningZone::Blast(Overpressure::Psi1),
        }
    }

    pub fn radius_km(self, effects: &ImmediateEffects) -> f64 {
        match self {
            GoverningZone::Thermal => effects.thermal_radius,
            GoverningZone::Blast(threshold) => effects.airblast_radius.radius(threshold),
        }
    }
}

/// Exposure of one country.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryExposure {
    pub name: String,
    pub distance_km: f64,
    pub tier: ExposureTier,
    pub population: f64,
    pub estimated_casualties: f64,
}

/// Exposure of one infrastructure point.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureExposure {
    pub name: String,
    pub kind: InfrastructureKind,
    pub distance_km: f64,
    pub tier: ExposureTier,
    pub disrupted: bool,
    /// 0 = intact, 1 = total loss.
    pub severity: f64,
    pub capacity_lost: f64,
}

/// Which dataset a skipped record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Country,
    Infrastructure,
}

/// A record left out of the aggregation, and why.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub name: String,
    pub kind: RecordKind,
    pub reason: DataUnavailable,
}

/// Population and immediate casualties within one tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TierTally {
    pub population: f64,
    pub casualties: f64,
}

impl TierTally {
    /// People in the tier who survived the impact.
    pub fn survivors(&self) -> f64 {
        (self.population - self.casualties).max(0.0)
    }
}

/// Per-tier totals over all countries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureSummary {
    pub destroyed: TierTally,
    pub severe: TierTally,
    pub moderate: TierTally,
    pub light: TierTally,
    pub thermal_only: TierTally,
}

impl ExposureSummary {
    pub fn tally(&self, tier: ExposureTier) -> Option<&TierTally> {
        match tier {
            ExposureTier::Destroyed => Some(&self.destroyed),
            ExposureTier::Severe => Some(&self.severe),
            ExposureTier::Moderate => Some(&self.moderate),
            ExposureTier::Light => Some(&self.light),
            ExposureTier::ThermalOnly => Some(&self.thermal_only),
            ExposureTier::Unaffected => None,
        }
    }

    fn tally_mut(&mut self, tier: ExposureTier) -> Option<&mut TierTally> {
        match tier {
            ExposureTier::Destroyed => Some(&mut self.destroyed),
            ExposureTier::Severe => Some(&mut self.severe),
            ExposureTier::Moderate => Some(&mut self.moderate),
            ExposureTier::Light => Some(&mut self.light),
            ExposureTier::ThermalOnly => Some(&mut self.thermal_only),
            ExposureTier::Unaffected => None,
        }
    }

    /// Immediate casualties summed across all affected countries.
    pub fn immediate_casualties(&self) -> f64 {
        self.destroyed.casualties
            + self.severe.casualties
            + self.moderate.casualties
            + self.light.casualties
            + self.thermal_only.casualties
    }

    /// Survivors of the structurally damaging tiers (destroyed, severe, moderate).
    pub fn blast_zone_survivors(&self) -> f64 {
        self.destroyed.survivors() + self.severe.survivors() + self.moderate.survivors()
    }
}

/// Exposure of every geo record to one impact.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureSet {
    pub countries: Vec<CountryExposure>,
    pub infrastructure: Vec<InfrastructureExposure>,
    pub skipped: Vec<SkippedRecord>,
    pub summary: ExposureSummary,
}

impl ExposureSet {
    pub fn immediate_casualties(&self) -> f64 {
        self.summary.immediate_casualties()
    }

    /// Countries with any exposure, worst first.
    pub fn affected_countries(&self) -> impl Iterator<Item = &CountryExposure> {
        let mut affected: Vec<&CountryExposure> = self
            .countries
            .iter()
            .filter(|c| c.tier != ExposureTier::Unaffected)
            .collect();
        affected.sort_by(|a, b| a.tier.cmp(&b.tier).then(a.distance_km.total_cmp(&b.distance_km)));
        affected.into_iter()
    }

    pub fn disrupted_infrastructure(&self) -> impl Iterator<Item = &InfrastructureExposure> {
        self.infrastructure.iter().filter(|i| i.disrupted)
    }
}

/// Aggregate exposure with the default calibration.
pub fn aggregate_exposure(
    point: GeoPoint,
    effects: &ImmediateEffects,
    countries: &[CountryData],
    infrastructure: &[InfrastructurePoint],
) -> ExposureSet {
    aggregate_exposure_with(point, effects, countries, infrastructure, &ExposureCalibration::default())
}

/// Classify every country and infrastructure point around `point`.
///
/// Records without a usable location or population are skipped and
/// reported; they never abort the aggregation. Inputs are only read.
pub fn aggregate_exposure_with(
    point: GeoPoint,
    effects: &ImmediateEffects,
    countries: &[CountryData],
    infrastructure: &[InfrastructurePoint],
    cal: &ExposureCalibration,
) -> ExposureSet {
    if countries.is_empty() && infrastructure.is_empty() {
        warn!("geo datasets are empty, exposure will be empty");
    }

    let mut set = ExposureSet::default();

    for country in countries {
        match country_exposure(point, effects, country, cal) {
            Ok(exposure) => {
                if let Some(tally) = set.summary.tally_mut(exposure.tier) {
                    tally.population += exposure.population;
                    tally.casualties += exposure.estimated_casualties;
                }
                set.countries.push(exposure);
            }
            Err(reason) => skip(&mut set, &country.name, RecordKind::Country, reason),
        }
    }

    for asset in infrastructure {
        match infrastructure_exposure(point, effects, asset, cal) {
            Ok(exposure) => set.infrastructure.push(exposure),
            Err(reason) => skip(&mut set, &asset.name, RecordKind::Infrastructure, reason),
        }
    }

    debug!(
        countries = set.countries.len(),
        infrastructure = set.infrastructure.len(),
        skipped = set.skipped.len(),
        casualties = set.immediate_casualties(),
        "aggregated exposure"
    );

    set
}

fn skip(set: &mut ExposureSet, name: &str, kind: RecordKind, reason: DataUnavailable) {
    warn!(record = name, ?kind, %reason, "skipping geo record");
    set.skipped.push(SkippedRecord {
        name: name.to_string(),
        kind,
        reason,
    });
}

fn locate(location: Option<GeoPoint>) -> Result<GeoPoint, DataUnavailable> {
    let location = location.ok_or(DataUnavailable::MissingLocation)?;
    if location.is_valid() {
        Ok(location)
    } else {
        Err(DataUnavailable::InvalidCoordinates {
            lat: location.lat,
            lng: location.lng,
        })
    }
}

/// Immediate casualty fraction for a tier and population density.
///
/// Denser regions approach a higher lethality, but the density factor
/// saturates and the result is capped.
pub fn casualty_fraction(tier: ExposureTier, population_density: f64, cal: &ExposureCalibration) -> f64 {
    let base = tier.severity(&cal.severity);
    let density = if population_density.is_finite() {
        population_density.max(0.0)
    } else {
        0.0
    };
    let density_factor = 1.0 + cal.density_gain * density / (density + cal.density_half_saturation);
    (base * density_factor).min(cal.max_casualty_fraction)
}

fn country_exposure(
    point: GeoPoint,
    effects: &ImmediateEffects,
    country: &CountryData,
    cal: &ExposureCalibration,
) -> Result<CountryExposure, DataUnavailable> {
    let centroid = locate(country.centroid)?;
    if !(country.population >= 0.0 && country.population.is_finite()) {
        return Err(DataUnavailable::InvalidPopulation {
            population: country.population,
        });
    }

    let distance_km = point.distance_km(&centroid);
    let tier = ExposureTier::classify(distance_km, effects);
    let fraction = casualty_fraction(tier, country.population_density, cal);

    Ok(CountryExposure {
        name: country.name.clone(),
        distance_km,
        tier,
        population: country.population,
        estimated_casualties: country.population * fraction,
    })
}

fn infrastructure_exposure(
    point: GeoPoint,
    effects: &ImmediateEffects,
    asset: &InfrastructurePoint,
    cal: &ExposureCalibration,
) -> Result<InfrastructureExposure, DataUnavailable> {
    let location = locate(asset.location)?;
    let distance_km = point.distance_km(&location);
    let tier = ExposureTier::classify(distance_km, effects);
    let radius = GoverningZone::for_kind(asset.kind).radius_km(effects);

    let disrupted = distance_km <= radius;
    let severity = if tier == ExposureTier::Destroyed {
        1.0
    } else if disrupted {
        // Quadratic falloff towards the edge of the governing zone
        let ratio = if radius > 0.0 { distance_km / radius } else { 1.0 };
        let floor = cal.min_disruption_severity;
        (1.0 - (1.0 - floor) * ratio * ratio).clamp(floor, 1.0)
    } else {
        0.0
    };

    let capacity = if asset.capacity.is_finite() {
        asset.capacity.max(0.0)
    } else {
        0.0
    };

    Ok(InfrastructureExposure {
        name: asset.name.clone(),
        kind: asset.kind,
        distance_km,
        tier,
        disrupted: disrupted || tier == ExposureTier::Destroyed,
        severity,
        capacity_lost: capacity * severity,
    })
}
