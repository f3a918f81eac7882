//! Resolve Sample Locations
//!
//! Prints aquifer resolutions for a set of reference locations, or for a
//! single `LAT LNG` pair given on the command line.
//!
//! Run with: cargo run --bin resolve_sample_locations [-- LAT LNG] [--json]

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquifer_resolver_rust::report::{JsonFormatter, MarkdownFormatter};
use aquifer_resolver_rust::{AquiferResolver, Coordinate};

/// Reference locations spanning the major terrains
const SAMPLE_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Chennai", 13.09, 80.27),
    ("Mumbai", 19.08, 72.88),
    ("Amravati", 20.93, 77.75),
    ("Bengaluru", 12.97, 77.59),
    ("Patna", 25.59, 85.14),
    ("Jaisalmer", 26.92, 70.91),
    ("Shimla", 31.10, 77.17),
    ("Guwahati", 26.14, 91.74),
    ("Gulf of Guinea", 0.0, 0.0),
];

fn parse_coordinate(args: &[String]) -> Result<Option<Coordinate>> {
    match args {
        [] => Ok(None),
        [lat, lng] => {
            let lat: f64 = lat.parse().with_context(|| format!("Invalid latitude: {}", lat))?;
            let lng: f64 = lng.parse().with_context(|| format!("Invalid longitude: {}", lng))?;
            Ok(Some(Coordinate::new(lat, lng)))
        }
        _ => bail!("Expected either no arguments or LAT LNG"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquifer_resolver_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let resolver = AquiferResolver::builtin();

    let locations: Vec<(String, Coordinate)> = match parse_coordinate(&args)? {
        Some(coord) => vec![(format!("{}, {}", coord.lat, coord.lng), coord)],
        None => SAMPLE_LOCATIONS
            .iter()
            .map(|(name, lat, lng)| (name.to_string(), Coordinate::new(*lat, *lng)))
            .collect(),
    };

    let coords: Vec<Coordinate> = locations.iter().map(|(_, c)| *c).collect();
    let resolutions = resolver.resolve_many(&coords);
    tracing::info!("Resolved {} locations", resolutions.len());

    if as_json {
        println!("{}", JsonFormatter::format_batch_compact(&resolutions)?);
        return Ok(());
    }

    println!("# Aquifer Resolution\n");
    for ((name, coord), resolution) in locations.iter().zip(&resolutions) {
        println!("<!-- {} -->", name);
        print!("{}", MarkdownFormatter::format(coord, resolution));
    }

    Ok(())
}
