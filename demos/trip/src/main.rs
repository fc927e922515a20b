//! trip — quote a toll-road trip from the command line.
//!
//! Resolves the two cities, intersects the straight-line route with the toll
//! zones, prices it with seeded congestion, speed and discount draws, and
//! prints the report.  Optional flags export CSV rows and a GeoJSON map.
//!
//! ```text
//! trip --start Meerut --end Mathura --vehicle truck --seed 7 --geojson trip.geojson
//! RUST_LOG=debug trip --start Agra --end Gurugram
//! trip --zones demos/trip/data/zones.csv --list
//! ```

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use toll_core::{LocationTable, VehicleType};
use toll_output::{CsvWriter, MapDocument, OutputWriter, render_text};
use toll_pricing::{MultiplierTable, load_multipliers_csv};
use toll_sim::{TollConfig, TripRequest, TripSimulator};
use toll_zones::{ZoneTable, load_locations_csv, load_zones_csv};

use logging::init_logging;

/// Quote a toll-road trip between two configured cities.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start location name (e.g., "Meerut")
    #[arg(short, long, required_unless_present = "list")]
    start: Option<String>,

    /// End location name (e.g., "Mathura")
    #[arg(short, long, required_unless_present = "list")]
    end: Option<String>,

    /// Vehicle type: car, truck, suv, or ambulance
    #[arg(short, long, default_value = "car")]
    vehicle: VehicleType,

    /// Seed for congestion, speed, and discount draws
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Locations CSV (name,lat,lon); reference cities if omitted
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Zones CSV (zone,lon,lat per vertex); reference zones if omitted
    #[arg(long)]
    zones: Option<PathBuf>,

    /// Multipliers CSV (zone,multiplier; `*` sets the default)
    #[arg(long)]
    multipliers: Option<PathBuf>,

    /// Directory to write trips.csv and line_items.csv into
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Path to write the GeoJSON map document to
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Print the configured locations and zones, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    log::debug!(
        "configuration: {} locations, {} zones, {} multipliers",
        config.locations.len(),
        config.zones.len(),
        config.multipliers.len()
    );

    if cli.list {
        print_tables(&config);
        return Ok(());
    }

    // clap enforces both unless --list.
    let (Some(start), Some(end)) = (cli.start.as_deref(), cli.end.as_deref()) else {
        anyhow::bail!("--start and --end are required");
    };

    let request = TripRequest::new(start, end, cli.vehicle);
    let mut sim = TripSimulator::new(&config, cli.seed);
    let quote = sim
        .quote(&request)
        .with_context(|| format!("cannot quote trip {start} -> {end}"))?;

    print!("{}", render_text(&quote));

    if let Some(dir) = &cli.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
        let mut writer = CsvWriter::new(dir)?;
        writer.write_quote(&quote)?;
        writer.finish()?;
        log::info!("wrote CSV output to {}", dir.display());
    }

    if let Some(path) = &cli.geojson {
        MapDocument::from_quote(&config, &quote)
            .write_to(path)
            .with_context(|| format!("cannot write {}", path.display()))?;
        log::info!("wrote map to {}", path.display());
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<TollConfig> {
    let locations = match &cli.locations {
        Some(p) => load_locations_csv(p).with_context(|| format!("loading {}", p.display()))?,
        None => LocationTable::reference(),
    };
    let zones = match &cli.zones {
        Some(p) => load_zones_csv(p).with_context(|| format!("loading {}", p.display()))?,
        None => ZoneTable::reference(),
    };
    let multipliers = match &cli.multipliers {
        Some(p) => load_multipliers_csv(p).with_context(|| format!("loading {}", p.display()))?,
        None => MultiplierTable::reference(),
    };
    Ok(TollConfig::new(locations, zones, multipliers))
}

fn print_tables(config: &TollConfig) {
    println!("Locations:");
    for (name, pos) in config.locations.iter() {
        println!("  {name:<12} {pos}");
    }
    println!("Zones:");
    for zone in config.zones.iter() {
        let factor = config.multipliers.lookup(&zone.name);
        let note = if factor.is_default() { " (default)" } else { "" };
        println!("  {:<12} x{:.2}{note}", zone.name, factor.factor());
    }
}
