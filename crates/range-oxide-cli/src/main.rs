// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use range_oxide_core::geo::{rings_for, to_geojson};
use range_oxide_core::lookup::{AirportFix, AirportLookup, GeminiLookup};
use range_oxide_core::report::render_summary;
use range_oxide_core::settings::Settings;
use range_oxide_core::{
    AdvancedFlightParameters, BasicFlightParameters, Coordinates, FlightMode, FlightProfile,
    UnitSystem,
};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(short, long, env = "RANGE_OXIDE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of a text summary
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Range from cruise speed and endurance
    Basic(BasicArgs),
    /// Range from a climb/cruise/descent fuel model
    Advanced(AdvancedArgs),
    /// Resolve an ICAO code or city name to coordinates
    Locate { query: String },
    /// Emit GeoJSON range rings around an origin
    Rings(RingsArgs),
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the settings file location
    Path,
    /// Print the effective settings
    Show,
    /// Write the built-in defaults to the settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// `--round-trip` and `--one-way` override the settings value.
fn round_trip_choice(round_trip: bool, one_way: bool, base: bool) -> bool {
    if one_way {
        false
    } else {
        round_trip || base
    }
}

#[derive(Args, Debug, Clone, Default)]
struct BasicArgs {
    /// Cruise speed (KT)
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,
    /// Total endurance (HRS)
    #[arg(long, allow_negative_numbers = true)]
    endurance: Option<f64>,
    /// Out-and-back: halve the one-way distance
    #[arg(long)]
    round_trip: bool,
    /// Force a one-way flight even if settings enable round trip
    #[arg(long, conflicts_with = "round_trip")]
    one_way: bool,
}

impl BasicArgs {
    fn apply(&self, base: BasicFlightParameters) -> BasicFlightParameters {
        BasicFlightParameters {
            cruise_speed: self.speed.unwrap_or(base.cruise_speed),
            total_endurance: self.endurance.unwrap_or(base.total_endurance),
            is_round_trip: round_trip_choice(self.round_trip, self.one_way, base.is_round_trip),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
struct AdvancedArgs {
    /// Fuel labels: imperial (GAL) or metric (L)
    #[arg(long)]
    units: Option<UnitSystem>,
    /// Climb speed (KT)
    #[arg(long, allow_negative_numbers = true)]
    climb_speed: Option<f64>,
    /// Climb time (MIN)
    #[arg(long, allow_negative_numbers = true)]
    climb_time: Option<f64>,
    /// Climb burn per hour
    #[arg(long, allow_negative_numbers = true)]
    climb_burn: Option<f64>,
    /// Cruise speed (KT)
    #[arg(long, allow_negative_numbers = true)]
    cruise_speed: Option<f64>,
    /// Cruise burn per hour
    #[arg(long, allow_negative_numbers = true)]
    cruise_burn: Option<f64>,
    /// Descent speed (KT)
    #[arg(long, allow_negative_numbers = true)]
    descent_speed: Option<f64>,
    /// Descent time (MIN)
    #[arg(long, allow_negative_numbers = true)]
    descent_time: Option<f64>,
    /// Descent burn per hour
    #[arg(long, allow_negative_numbers = true)]
    descent_burn: Option<f64>,
    /// Total usable fuel
    #[arg(long, allow_negative_numbers = true)]
    fuel: Option<f64>,
    /// Out-and-back: halve the one-way distance
    #[arg(long)]
    round_trip: bool,
    /// Force a one-way flight even if settings enable round trip
    #[arg(long, conflicts_with = "round_trip")]
    one_way: bool,
}

impl AdvancedArgs {
    fn apply(&self, base: AdvancedFlightParameters) -> AdvancedFlightParameters {
        let mut p = base;
        p.unit_system = self.units.unwrap_or(base.unit_system);
        p.climb.speed = self.climb_speed.unwrap_or(base.climb.speed);
        p.climb.time_minutes = self.climb_time.unwrap_or(base.climb.time_minutes);
        p.climb.burn_rate = self.climb_burn.unwrap_or(base.climb.burn_rate);
        p.cruise.speed = self.cruise_speed.unwrap_or(base.cruise.speed);
        p.cruise.burn_rate = self.cruise_burn.unwrap_or(base.cruise.burn_rate);
        p.descent.speed = self.descent_speed.unwrap_or(base.descent.speed);
        p.descent.time_minutes = self.descent_time.unwrap_or(base.descent.time_minutes);
        p.descent.burn_rate = self.descent_burn.unwrap_or(base.descent.burn_rate);
        p.total_fuel = self.fuel.unwrap_or(base.total_fuel);
        p.is_round_trip = round_trip_choice(self.round_trip, self.one_way, base.is_round_trip);
        p
    }
}

#[derive(Args)]
struct RingsArgs {
    /// Origin latitude
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Origin longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
    /// Resolve the origin from an ICAO code or city name
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    airport: Option<String>,
    /// Polygon vertices per ring
    #[arg(long)]
    segments: Option<usize>,

    #[command(subcommand)]
    profile: Option<ProfileCommand>,
}

#[derive(Subcommand)]
enum ProfileCommand {
    Basic(BasicArgs),
    Advanced(AdvancedArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("range_oxide")
        .build();
    // A second init only happens in tests; ignore it.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_profile(settings: &Settings, profile: Option<&ProfileCommand>) -> FlightProfile {
    match profile {
        Some(ProfileCommand::Basic(args)) => FlightProfile::Basic(args.apply(settings.basic)),
        Some(ProfileCommand::Advanced(args)) => {
            FlightProfile::Advanced(args.apply(settings.advanced))
        }
        None => match settings.mode {
            FlightMode::Basic => FlightProfile::Basic(settings.basic),
            FlightMode::Advanced => FlightProfile::Advanced(settings.advanced),
        },
    }
}

fn units_of(profile: &FlightProfile) -> UnitSystem {
    match profile {
        FlightProfile::Basic(_) => UnitSystem::default(),
        FlightProfile::Advanced(p) => p.unit_system,
    }
}

fn print_calculation(profile: &FlightProfile, json: bool) -> Result<()> {
    let result = profile.calculate();
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!(
            "{}",
            render_summary(&result, profile.mode(), units_of(profile))
        );
    }
    Ok(())
}

async fn resolve(settings: &Settings, query: &str) -> Result<AirportFix> {
    let lookup = GeminiLookup::from_env_or(settings.gemini_api_key.as_deref())?;
    match lookup.lookup(query).await? {
        Some(fix) => Ok(fix),
        None => bail!("Airport not found: '{}'", query),
    }
}

fn init_settings(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default()
        .save(path)
        .context("Failed to write settings")?;
    info!("Settings reset to defaults — path={}", path.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);

    // These must work even when the existing file is unreadable.
    match &cli.command {
        Commands::Config {
            action: ConfigAction::Path,
        } => {
            println!("{}", settings_path.display());
            return Ok(());
        }
        Commands::Config {
            action: ConfigAction::Init { force },
        } => {
            init_settings(&settings_path, *force)?;
            println!("Wrote defaults to {}", settings_path.display());
            return Ok(());
        }
        _ => {}
    }

    let settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    debug!("Using settings — path={}", settings_path.display());

    match &cli.command {
        Commands::Basic(args) => {
            let profile = FlightProfile::Basic(args.apply(settings.basic));
            print_calculation(&profile, cli.json)?;
        }
        Commands::Advanced(args) => {
            let profile = FlightProfile::Advanced(args.apply(settings.advanced));
            print_calculation(&profile, cli.json)?;
        }
        Commands::Locate { query } => {
            let fix = resolve(&settings, query).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&fix)?);
            } else {
                println!("{}", fix.display_name());
                println!("{:.6}, {:.6}", fix.lat, fix.lng);
            }
        }
        Commands::Rings(args) => {
            let (origin, name) = match (&args.airport, args.lat, args.lng) {
                (Some(query), _, _) => {
                    let fix = resolve(&settings, query).await?;
                    (fix.coordinates(), Some(fix.display_name()))
                }
                (None, Some(lat), Some(lng)) => (Coordinates::new(lat, lng), None),
                _ => (settings.default_center, None),
            };
            if !origin.is_valid() {
                bail!("Origin out of range: {}, {}", origin.lat, origin.lng);
            }

            let profile = build_profile(&settings, args.profile.as_ref());
            let result = profile.calculate();
            let segments = args.segments.unwrap_or(settings.ring_segments);
            let rings = rings_for(origin, &result, segments);
            info!(
                "Rings around {:.4}, {:.4} — max_nm={:.0} safe_nm={:.0}",
                origin.lat, origin.lng, result.max_range_nm, result.safe_range_nm
            );

            let geojson = to_geojson(origin, name.as_deref(), &rings);
            println!("{}", serde_json::to_string_pretty(&geojson)?);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&settings)?),
            ConfigAction::Path | ConfigAction::Init { .. } => unreachable!("handled before load"),
        },
    }

    Ok(())
}
