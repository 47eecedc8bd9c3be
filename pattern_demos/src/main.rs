//! Pattern Demos - walks through the strategy and observer crates.
//!
//! Flies and fires a missile ship, re-arms it with the rift cannon, then
//! feeds a sequence of snowfall readings to the three snowsport activities.

use anyhow::{Context, Result};
use clap::Parser;
use ship_strategy::{FleetConfig, InterdimensionalRiftCannon, Ship};
use snow_watch::{ActivityKind, Measurement};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pattern-demos")]
#[command(about = "Strategy and observer pattern walkthrough")]
struct Cli {
    /// TOML fleet file with `[[ships]]` entries; the stock missile ship is used otherwise
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Snowfall readings to broadcast, in inches of new snow
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "3.25,2.0,1.0,8.5"
    )]
    readings: Vec<f64>,

    /// Print the final advisories as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let ships = match load_fleet(cli.fleet.as_deref()) {
        Ok(ships) => ships,
        Err(e) => {
            error!("Failed to load fleet: {e:#}");
            std::process::exit(1);
        }
    };

    for ship in ships {
        run_ship(ship);
    }

    let mut measurement = Measurement::new();
    let activities: Vec<_> = ActivityKind::ALL.iter().map(|kind| kind.build()).collect();
    for activity in &activities {
        measurement.add_observer(Rc::clone(activity));
    }

    for reading in &cli.readings {
        info!("New snowfall: {} inches", reading);
        measurement.set_reading(*reading);
        for activity in &activities {
            let activity = activity.borrow();
            info!("  {}: {}", activity.name(), activity.decide());
        }
    }

    if cli.json {
        match measurement.report_json() {
            Ok(report) => println!("{report}"),
            Err(e) => {
                error!("Failed to render report: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn load_fleet(path: Option<&Path>) -> Result<Vec<Ship>> {
    let Some(path) = path else {
        return Ok(vec![Ship::missile_ship()]);
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let fleet = FleetConfig::from_toml_str(&source)
        .with_context(|| format!("Invalid fleet file {}", path.display()))?;
    Ok(fleet.build()?)
}

fn run_ship(mut ship: Ship) {
    info!("{} (captain {})", ship.name, ship.captain);
    info!("  {}", ship.fire().narration);
    info!("  {}", ship.fly().narration);
    info!("  {}", ship.set_navigation("Risa"));

    ship.set_weapon_strategy(InterdimensionalRiftCannon);
    info!("  {}", ship.fire().narration);
}
