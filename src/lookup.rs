//! Lookup orchestration
//!
//! One lookup resolves a location, issues the forecast and air-quality
//! fetches concurrently, and assembles the result into a `WeatherBundle`.
//! Both mandatory fetches must succeed or the whole lookup fails; the
//! reverse-geocoded display name is the only best-effort piece.

use thiserror::Error;

use crate::data::{
    assemble_bundle, AirQualityClient, AirQualityError, Coordinate, ForecastClient,
    ForecastError, GeocodeClient, GeocodeError, NormalizeError, WeatherBundle,
};

/// Errors that can abort a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// Forward geocoding failed (unknown city or transport failure)
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The forecast fetch failed
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// The air-quality fetch failed
    #[error(transparent)]
    AirQuality(#[from] AirQualityError),

    /// The payloads could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// The two ways a lookup can be requested
#[derive(Debug, Clone, PartialEq)]
pub enum LookupRequest {
    /// Look up by free-text city name
    City(String),
    /// Look up by position
    Coordinates(Coordinate),
}

/// Orchestrates the three API clients into whole-bundle lookups
///
/// Stateless across lookups: each call allocates a fresh bundle and shares
/// nothing with previous calls.
#[derive(Debug, Clone)]
pub struct WeatherService {
    geocode: GeocodeClient,
    forecast: ForecastClient,
    air_quality: AirQualityClient,
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherService {
    /// Creates a service backed by the production API endpoints
    pub fn new() -> Self {
        Self {
            geocode: GeocodeClient::new(),
            forecast: ForecastClient::new(),
            air_quality: AirQualityClient::new(),
        }
    }

    /// Creates a service with custom clients (for testing)
    pub fn with_clients(
        geocode: GeocodeClient,
        forecast: ForecastClient,
        air_quality: AirQualityClient,
    ) -> Self {
        Self {
            geocode,
            forecast,
            air_quality,
        }
    }

    /// Runs whichever lookup the request names
    pub async fn lookup(&self, request: &LookupRequest) -> Result<WeatherBundle, LookupError> {
        match request {
            LookupRequest::City(name) => self.lookup_by_city(name).await,
            LookupRequest::Coordinates(coordinate) => {
                self.lookup_by_coordinates(*coordinate).await
            }
        }
    }

    /// Looks up weather by city name
    ///
    /// Geocoding failures (including an unknown city) abort the lookup.
    /// The forecast and air-quality fetches then run concurrently; either
    /// failing aborts the lookup with no partial bundle.
    pub async fn lookup_by_city(&self, name: &str) -> Result<WeatherBundle, LookupError> {
        let location = self.geocode.resolve_city(name).await?;

        let (forecast, air_quality) = futures::join!(
            self.forecast.fetch(location.coordinate),
            self.air_quality.fetch(location.coordinate),
        );

        Ok(assemble_bundle(location.display_name, &forecast?, &air_quality?)?)
    }

    /// Looks up weather by position
    ///
    /// The forecast fetch, air-quality fetch, and reverse geocode all run
    /// concurrently. The reverse geocode is best-effort: its failure
    /// substitutes a fallback display name and never aborts the lookup.
    pub async fn lookup_by_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> Result<WeatherBundle, LookupError> {
        let (display_name, forecast, air_quality) = futures::join!(
            self.geocode.resolve_coordinates(coordinate),
            self.forecast.fetch(coordinate),
            self.air_quality.fetch(coordinate),
        );

        Ok(assemble_bundle(display_name, &forecast?, &air_quality?)?)
    }
}
