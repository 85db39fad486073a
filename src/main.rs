//! Aftermath - command line impact assessment.
//!
//! Runs the engine for a reference event or an ad-hoc asteroid and prints
//! the immediate effects, the exposure summary and the timeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use aftermath::exposure::ExposureTier;
use aftermath::projection::narrative::{format_count, format_yield};
use aftermath::scenarios::{self, REFERENCE_EVENTS};
use aftermath::{
    Composition, EngineConfig, GeoPoint, GeoSnapshot, ImpactAssessment, ImpactEngine,
    ImpactParameters, TargetType, TimelineSnapshot,
};

#[derive(Parser)]
#[command(name = "aftermath", about = "Asteroid impact effects and consequence timeline")]
struct Cli {
    /// Reference event to assess (see --list-presets)
    #[arg(long, conflicts_with_all = ["diameter", "velocity", "density", "composition"])]
    preset: Option<String>,

    /// Asteroid diameter (m)
    #[arg(long, required_unless_present_any = ["preset", "list_presets"])]
    diameter: Option<f64>,

    /// Entry velocity (km/s)
    #[arg(long, required_unless_present_any = ["preset", "list_presets"])]
    velocity: Option<f64>,

    /// Bulk density (kg/m³); derived from --composition when omitted
    #[arg(long)]
    density: Option<f64>,

    /// Composition tag: stony, iron, carbonaceous, stony-iron, basaltic, default
    #[arg(long, default_value = "default")]
    composition: String,

    /// Impact angle from horizontal (degrees)
    #[arg(long)]
    angle: Option<f64>,

    /// Ocean impact
    #[arg(long)]
    water: bool,

    /// Impact latitude (degrees)
    #[arg(long, allow_hyphen_values = true, required_unless_present_any = ["preset", "list_presets"])]
    lat: Option<f64>,

    /// Impact longitude (degrees)
    #[arg(long, allow_hyphen_values = true, required_unless_present_any = ["preset", "list_presets"])]
    lng: Option<f64>,

    /// Countries dataset (JSON array)
    #[arg(long)]
    countries: Option<PathBuf>,

    /// Infrastructure dataset (JSON array)
    #[arg(long)]
    infrastructure: Option<PathBuf>,

    /// Engine calibration overrides (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra offsets to project (years), in addition to the canonical timeline
    #[arg(long = "at", allow_hyphen_values = true)]
    at: Vec<f64>,

    /// Print the full assessment as JSON
    #[arg(long)]
    json: bool,

    /// List the reference events and exit
    #[arg(long)]
    list_presets: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    #[serde(flatten)]
    assessment: &'a ImpactAssessment,
    projections: &'a [TimelineSnapshot],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aftermath=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_presets {
        list_presets();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            let json = read(path)?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("Invalid engine config: {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    let engine = ImpactEngine::new(config);

    let params = impact_parameters(&cli)?;
    let geo = load_geo(cli.countries.as_deref(), cli.infrastructure.as_deref())?;
    if geo.is_empty() {
        tracing::info!("No geo datasets given, reporting physical effects only");
    }

    let assessment = engine.assess(&params, &geo)?;
    let projections: Vec<TimelineSnapshot> = cli
        .at
        .iter()
        .map(|&t| engine.project_at(&assessment.effects, &assessment.exposure, t))
        .collect();

    if cli.json {
        let report = Report {
            assessment: &assessment,
            projections: &projections,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&assessment, &projections);
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn impact_parameters(cli: &Cli) -> Result<ImpactParameters> {
    let mut params = match &cli.preset {
        Some(id) => match scenarios::find(id) {
            Some(event) => event.parameters(),
            None => bail!("Unknown preset '{id}'. Use --list-presets to see the reference events"),
        },
        None => {
            let (Some(diameter), Some(velocity)) = (cli.diameter, cli.velocity) else {
                bail!("--diameter and --velocity are required without --preset");
            };
            let density = match cli.density {
                Some(density) => density,
                None => cli.composition.parse::<Composition>()?.density(),
            };
            ImpactParameters::new(diameter, velocity, density, GeoPoint::default())
        }
    };

    if let Some(lat) = cli.lat {
        params.latitude = lat;
    }
    if let Some(lng) = cli.lng {
        params.longitude = lng;
    }
    if let Some(angle) = cli.angle {
        params.impact_angle = angle;
    }
    if cli.water {
        params.target_type = TargetType::Water;
    }

    params.validate()?;
    Ok(params)
}

fn load_geo(countries: Option<&Path>, infrastructure: Option<&Path>) -> Result<GeoSnapshot> {
    let countries_json = countries.map(read).transpose()?.unwrap_or_else(|| "[]".to_string());
    let infrastructure_json = infrastructure
        .map(read)
        .transpose()?
        .unwrap_or_else(|| "[]".to_string());
    GeoSnapshot::from_json(&countries_json, &infrastructure_json).context("Malformed geo dataset")
}

fn list_presets() {
    for event in REFERENCE_EVENTS.iter() {
        println!("{:<15} {:<28} {}", event.id, event.name, event.description);
    }
}

fn print_report(assessment: &ImpactAssessment, projections: &[TimelineSnapshot]) {
    let p = &assessment.parameters;
    let e = &assessment.effects;

    println!(
        "Impact: {:.0} m at {:.1} km/s, {:.0} kg/m³, {:.0}° onto {} at ({:.3}, {:.3})",
        p.asteroid_diameter,
        p.velocity,
        p.density,
        p.impact_angle,
        p.target_type.name(),
        p.latitude,
        p.longitude
    );
    println!();
    println!("Immediate effects");
    println!("  Energy            {:.3e} J ({})", e.kinetic_energy, format_yield(e.tnt_equivalent));
    println!(
        "  Crater            {:.2} km wide, {:.2} km deep",
        e.crater.diameter / 1000.0,
        e.crater.depth / 1000.0
    );
    println!(
        "  Airblast          20 psi {:.1} km | 10 psi {:.1} km | 5 psi {:.1} km | 1 psi {:.1} km",
        e.airblast_radius.psi20, e.airblast_radius.psi10, e.airblast_radius.psi5, e.airblast_radius.psi1
    );
    println!("  Thermal           {:.1} km", e.thermal_radius);
    println!("  Seismic           M {:.1}", e.seismic_magnitude);
    if let Some(t) = e.tsunami {
        println!(
            "  Tsunami           {:.0} m waves, {:.0} km of coastline",
            t.max_wave_height, t.affected_coastline_length
        );
    }

    let exposure = &assessment.exposure;
    if !exposure.countries.is_empty() || !exposure.infrastructure.is_empty() {
        println!();
        println!("Exposure");
        for tier in ExposureTier::ALL {
            let Some(tally) = exposure.summary.tally(*tier) else {
                continue;
            };
            if tally.population > 0.0 {
                println!(
                    "  {:<17} {} people, {} killed",
                    tier.name(),
                    format_count(tally.population),
                    format_count(tally.casualties)
                );
            }
        }
        let disrupted = exposure.disrupted_infrastructure().count();
        println!("  Infrastructure    {disrupted} of {} sites disrupted", exposure.infrastructure.len());
        if !exposure.skipped.is_empty() {
            println!("  Skipped records   {}", exposure.skipped.len());
        }
    }

    println!();
    println!("Timeline");
    for (_, snapshot) in assessment.timeline.iter() {
        print_snapshot(snapshot);
    }
    for snapshot in projections {
        print_snapshot(snapshot);
    }
}

fn print_snapshot(s: &TimelineSnapshot) {
    println!(
        "  {:<7} dead {:>14} | displaced {:>14} | {:+.2} °C | habitable {:.1}% | food {:.1}%",
        s.label,
        format_count(s.casualties),
        format_count(s.displaced),
        s.temperature_anomaly,
        s.habitable_area_fraction,
        s.food_production_index
    );
    println!("          {}", s.narrative);
}
