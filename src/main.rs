//! Skycast - weather lookup for any city
//!
//! Looks up current conditions, a 5-day forecast, air quality, UV index, and
//! sun times for a city name or coordinate pair, and remembers the last
//! successful lookup for argument-free reruns.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skycast::cli::Cli;
use skycast::data::Coordinate;
use skycast::display::render_bundle;
use skycast::lookup::{LookupRequest, WeatherService};
use skycast::store::{LocationStore, SavedLookup};

/// Converts a saved lookup back into a runnable request
fn request_from_saved(saved: SavedLookup) -> LookupRequest {
    match saved {
        SavedLookup::City(name) => LookupRequest::City(name),
        SavedLookup::Coordinates { lat, lon } => LookupRequest::Coordinates(Coordinate {
            latitude: lat,
            longitude: lon,
        }),
    }
}

/// Converts a request into its persisted form
fn saved_from_request(request: &LookupRequest) -> SavedLookup {
    match request {
        LookupRequest::City(name) => SavedLookup::City(name.clone()),
        LookupRequest::Coordinates(coordinate) => SavedLookup::Coordinates {
            lat: coordinate.latitude,
            lon: coordinate.longitude,
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = LocationStore::new();

    let request = match cli.request()? {
        Some(request) => request,
        None => {
            let saved = store.as_ref().and_then(LocationStore::load);
            match saved {
                Some(saved) => request_from_saved(saved),
                None => {
                    println!(
                        "No saved location yet. Try: skycast <CITY> or skycast --coords LAT,LON"
                    );
                    return Ok(());
                }
            }
        }
    };

    let service = WeatherService::new();
    let bundle = service
        .lookup(&request)
        .await
        .context("Failed to fetch weather data")?;

    print!("{}", render_bundle(&bundle));

    // Persist only after a successful lookup; a write failure is not worth
    // failing the run over
    if let Some(store) = store {
        if let Err(err) = store.save(&saved_from_request(&request)) {
            tracing::warn!("Could not save last location: {}", err);
        }
    }

    Ok(())
}
