//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap: a free-text city
//! name, a `--coords LAT,LON` position, or no arguments at all (repeat the
//! last saved lookup).

use clap::Parser;
use thiserror::Error;

use crate::data::Coordinate;
use crate::lookup::LookupRequest;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The --coords value is not a valid "LAT,LON" pair
    #[error("Invalid coordinates: '{0}'. Expected LAT,LON (e.g. 49.28,-123.12)")]
    InvalidCoordinates(String),

    /// The latitude or longitude is outside its valid range
    #[error("Coordinates out of range: '{0}'. Latitude must be -90..90, longitude -180..180")]
    OutOfRange(String),
}

/// Skycast - current conditions, 5-day forecast, air quality, and UV index
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Weather lookup by city name or coordinates")]
#[command(version)]
pub struct Cli {
    /// City name to look up (multiple words are joined, e.g. `skycast new york`)
    ///
    /// With no city and no --coords, the last successful lookup is repeated.
    pub city: Vec<String>,

    /// Look up by coordinates instead of a city name
    #[arg(long, value_name = "LAT,LON", conflicts_with = "city")]
    pub coords: Option<String>,
}

impl Cli {
    /// Derives the lookup request from the parsed arguments
    ///
    /// # Returns
    /// * `Ok(Some(request))` - A city or coordinate lookup was requested
    /// * `Ok(None)` - No arguments; the caller should fall back to the saved lookup
    /// * `Err(CliError)` - The --coords value was malformed
    pub fn request(&self) -> Result<Option<LookupRequest>, CliError> {
        if let Some(coords) = &self.coords {
            return Ok(Some(LookupRequest::Coordinates(parse_coords_arg(coords)?)));
        }

        if self.city.is_empty() {
            return Ok(None);
        }

        Ok(Some(LookupRequest::City(self.city.join(" "))))
    }
}

/// Parses a "LAT,LON" argument into a Coordinate
///
/// # Arguments
/// * `s` - The raw argument value
///
/// # Returns
/// * `Ok(Coordinate)` if the value is a valid in-range pair
/// * `Err(CliError)` otherwise
pub fn parse_coords_arg(s: &str) -> Result<Coordinate, CliError> {
    let (lat_str, lon_str) = s
        .split_once(',')
        .ok_or_else(|| CliError::InvalidCoordinates(s.to_string()))?;

    let latitude: f64 = lat_str
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidCoordinates(s.to_string()))?;
    let longitude: f64 = lon_str
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidCoordinates(s.to_string()))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(CliError::OutOfRange(s.to_string()));
    }

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords_arg_valid() {
        let coordinate = parse_coords_arg("49.28,-123.12").unwrap();
        assert!((coordinate.latitude - 49.28).abs() < 1e-9);
        assert!((coordinate.longitude - (-123.12)).abs() < 1e-9);
    }

    #[test]
    fn test_parse_coords_arg_allows_spaces() {
        let coordinate = parse_coords_arg("49.28, -123.12").unwrap();
        assert!((coordinate.longitude - (-123.12)).abs() < 1e-9);
    }

    #[test]
    fn test_parse_coords_arg_missing_comma() {
        let result = parse_coords_arg("49.28 -123.12");
        assert!(matches!(result, Err(CliError::InvalidCoordinates(_))));
    }

    #[test]
    fn test_parse_coords_arg_non_numeric() {
        let result = parse_coords_arg("north,west");
        assert!(matches!(result, Err(CliError::InvalidCoordinates(_))));
    }

    #[test]
    fn test_parse_coords_arg_out_of_range() {
        assert!(matches!(
            parse_coords_arg("95.0,10.0"),
            Err(CliError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_coords_arg("45.0,200.0"),
            Err(CliError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_request_city_joins_words() {
        let cli = Cli::parse_from(["skycast", "new", "york"]);
        let request = cli.request().unwrap();
        assert_eq!(request, Some(LookupRequest::City("new york".to_string())));
    }

    #[test]
    fn test_request_coords() {
        let cli = Cli::parse_from(["skycast", "--coords", "49.28,-123.12"]);
        let request = cli.request().unwrap().expect("Should be a request");
        match request {
            LookupRequest::Coordinates(coordinate) => {
                assert!((coordinate.latitude - 49.28).abs() < 1e-9);
            }
            other => panic!("Expected coordinates request, got {:?}", other),
        }
    }

    #[test]
    fn test_request_none_when_no_args() {
        let cli = Cli::parse_from(["skycast"]);
        assert_eq!(cli.request().unwrap(), None);
    }

    #[test]
    fn test_request_invalid_coords_is_error() {
        let cli = Cli::parse_from(["skycast", "--coords", "nope"]);
        assert!(cli.request().is_err());
    }
}
