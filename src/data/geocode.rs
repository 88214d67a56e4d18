//! Open-Meteo geocoding API client
//!
//! Resolves free-text city names to coordinates (forward) and coordinates to
//! display names (reverse). Forward failures are fatal to a lookup; reverse
//! failures degrade to a fallback label so coordinate lookups never block on
//! the display name.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{Coordinate, Location};

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// Display name used when reverse geocoding fails
const FALLBACK_DISPLAY_NAME: &str = "My Location";

/// Errors that can occur during forward geocoding
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The geocoding service returned zero results for the city name
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// HTTP request failed or returned a non-success status
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse the JSON response
    #[error("Failed to parse geocoding response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    /// Creates a new GeocodeClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Creates a new GeocodeClient against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolves a city name to its best-match location
    ///
    /// # Arguments
    /// * `name` - Free-text city name
    ///
    /// # Returns
    /// * `Ok(Location)` - Best match with a "{name}, {country}" display name
    /// * `Err(GeocodeError::CityNotFound)` - The service returned no results
    /// * `Err(GeocodeError::Request)` - Transport failure or non-success status
    pub async fn resolve_city(&self, name: &str) -> Result<Location, GeocodeError> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencode(name)
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let payload: GeocodingResponse = serde_json::from_str(&text)?;

        let result = payload
            .results
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| GeocodeError::CityNotFound(name.to_string()))?;

        Ok(Location {
            display_name: format!("{}, {}", result.name, result.country),
            coordinate: Coordinate {
                latitude: result.latitude,
                longitude: result.longitude,
            },
        })
    }

    /// Resolves coordinates to a display name, best-effort
    ///
    /// Any failure (transport, non-success status, empty results, parse)
    /// yields the literal fallback "My Location" instead of an error, so the
    /// weather itself is never blocked on the name.
    pub async fn resolve_coordinates(&self, coordinate: Coordinate) -> String {
        match self.reverse_lookup(coordinate).await {
            Ok(Some(name)) => name,
            Ok(None) => FALLBACK_DISPLAY_NAME.to_string(),
            Err(err) => {
                tracing::debug!("Reverse geocode failed, using fallback: {}", err);
                FALLBACK_DISPLAY_NAME.to_string()
            }
        }
    }

    /// Performs the reverse lookup; `Ok(None)` means zero results
    async fn reverse_lookup(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<String>, GeocodeError> {
        let url = format!(
            "{}/search?latitude={}&longitude={}&count=1&language=en&format=json",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let payload: GeocodingResponse = serde_json::from_str(&text)?;

        Ok(payload
            .results
            .and_then(|results| results.into_iter().next())
            .map(|result| format!("{}, {}", result.name, result.country)))
    }
}

/// Percent-encodes a query value (space and reserved characters)
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when there are no matches
    results: Option<Vec<GeocodingResult>>,
}

/// A single geocoding match
#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_RESPONSE: &str = r#"{
        "results": [
            {
                "id": 5911606,
                "name": "Vancouver",
                "latitude": 49.24966,
                "longitude": -123.11934,
                "elevation": 70.0,
                "feature_code": "PPL",
                "country_code": "CA",
                "timezone": "America/Vancouver",
                "population": 600000,
                "country_id": 6251999,
                "country": "Canada"
            }
        ],
        "generationtime_ms": 0.7
    }"#;

    const EMPTY_RESPONSE: &str = r#"{ "generationtime_ms": 0.4 }"#;

    #[test]
    fn test_parse_match_response() {
        let payload: GeocodingResponse =
            serde_json::from_str(MATCH_RESPONSE).expect("Failed to parse match response");

        let results = payload.results.expect("Should have results");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Vancouver");
        assert_eq!(results[0].country, "Canada");
        assert!((results[0].latitude - 49.24966).abs() < 1e-6);
    }

    #[test]
    fn test_parse_empty_response() {
        let payload: GeocodingResponse =
            serde_json::from_str(EMPTY_RESPONSE).expect("Failed to parse empty response");

        assert!(payload.results.is_none());
    }

    #[test]
    fn test_parse_empty_results_array() {
        let payload: GeocodingResponse =
            serde_json::from_str(r#"{ "results": [] }"#).expect("Failed to parse");

        assert!(payload.results.expect("results present").is_empty());
    }

    #[test]
    fn test_urlencode_plain_ascii() {
        assert_eq!(urlencode("Vancouver"), "Vancouver");
    }

    #[test]
    fn test_urlencode_spaces_and_punctuation() {
        assert_eq!(urlencode("New York"), "New%20York");
        assert_eq!(urlencode("Val-d'Or"), "Val-d%27Or");
    }

    #[test]
    fn test_urlencode_utf8() {
        assert_eq!(urlencode("Zürich"), "Z%C3%BCrich");
    }
}
