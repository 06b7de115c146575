use airport_index::catalog::AirportCatalog;
use airport_index::AirportIndex;
use logger::{Color, Logger};
use route_finder::errors::FinderError;
use route_finder::DestinationFinder;
use std::env;
use std::path::Path;

mod loader;

const LOG_DIR: &str = "logs";

/// Main entry point: load an airport catalog and answer one duration query.
///
/// The program reads a CSV of airports, indexes them, and looks for a
/// destination reachable from the departure airport in approximately the
/// requested number of flying hours (within a ±10% tolerance band).
///
/// # Usage
///
/// ```sh
/// cargo run -- <airports.csv> <ICAO> <hours> [seed]
/// ```
///
/// # Example Execution
///
/// ```sh
/// cargo run -- datasets/RWY.csv EGLL 2.5
/// ```
///
/// # Errors
///
/// The program returns an error if:
/// - The number of arguments is incorrect.
/// - The departure code is not exactly 4 characters.
/// - The duration is not a positive number of hours.
/// - The optional seed is not an unsigned integer.
/// - The source file cannot be opened or read.
/// - The departure airport is not present in the catalog.
///
/// A search that exhausts the catalog without a match is a reported result,
/// not an error.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        return Err("Usage: flight-scout <airports.csv> <ICAO> <hours> [seed]".to_string());
    }

    let departure = args[2].as_str();
    if departure.len() != 4 {
        return Err("Departure ICAO code must be exactly 4 characters".to_string());
    }

    let hours: f64 = args[3]
        .parse()
        .map_err(|_| "Flight duration must be a number of hours".to_string())?;
    if hours <= 0.0 {
        return Err("Flight duration must be greater than zero".to_string());
    }

    let seed = match args.get(4) {
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| "Seed must be an unsigned integer".to_string())?,
        ),
        None => None,
    };

    let log = Logger::new(Path::new(LOG_DIR), "flight_scout").map_err(|e| e.to_string())?;

    let mut index = AirportIndex::new();
    let summary =
        loader::load_airports(Path::new(&args[1]), &mut index).map_err(|e| e.to_string())?;

    log.info(
        &format!("{} airports imported", summary.inserted),
        Color::Green,
        true,
    )
    .map_err(|e| e.to_string())?;
    log.info(
        &format!("With {} collisions", index.collision_count()),
        Color::Cyan,
        true,
    )
    .map_err(|e| e.to_string())?;
    if summary.skipped > 0 {
        log.warn(&format!("{} malformed rows skipped", summary.skipped), true)
            .map_err(|e| e.to_string())?;
    }
    if summary.rejected_duplicates > 0 {
        log.warn(
            &format!("{} duplicate codes rejected", summary.rejected_duplicates),
            true,
        )
        .map_err(|e| e.to_string())?;
    }

    let catalog = AirportCatalog::build(&index, index.len());
    let mut finder = match seed {
        Some(seed) => DestinationFinder::with_seed(&index, &catalog, seed),
        None => DestinationFinder::new(&index, &catalog),
    };

    match finder.find_destination(departure, hours) {
        Ok(route) => {
            log.info(
                &format!(
                    "Found a destination: {}->{}: {:.1} hours",
                    departure, route.destination, route.duration_hours
                ),
                Color::Green,
                true,
            )
            .map_err(|e| e.to_string())?;
        }
        Err(FinderError::NoMatchWithinTolerance { .. }) => {
            log.info(
                &format!(
                    "No airport is within {:.1} hours +/- 10% flying time from {}",
                    hours, departure
                ),
                Color::Yellow,
                true,
            )
            .map_err(|e| e.to_string())?;
        }
        Err(err @ FinderError::UnknownDeparture(_)) => {
            let _ = log.error(&err.to_string(), false);
            return Err(err.to_string());
        }
    }

    Ok(())
}
