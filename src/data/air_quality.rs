//! Open-Meteo air quality API client
//!
//! Fetches hourly US AQI readings for the same 6-day window as the forecast.
//! Readings may be null for hours the model has no data; normalization
//! discards those before averaging.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Coordinate;

/// Base URL for the Open-Meteo air quality API
const AIR_QUALITY_BASE_URL: &str = "https://air-quality-api.open-meteo.com/v1";

/// Errors that can occur when fetching air quality data
#[derive(Debug, Error)]
pub enum AirQualityError {
    /// HTTP request failed or returned a non-success status
    #[error("Air quality request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse the JSON response
    #[error("Failed to parse air quality response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the Open-Meteo air quality API
#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
}

impl Default for AirQualityClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AirQualityClient {
    /// Creates a new AirQualityClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: AIR_QUALITY_BASE_URL.to_string(),
        }
    }

    /// Creates a new AirQualityClient against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the raw hourly AQI payload for the given position
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
    ) -> Result<AirQualityPayload, AirQualityError> {
        let url = format!(
            "{}/air-quality?latitude={}&longitude={}&hourly=us_aqi&timezone=auto&forecast_days=6",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let payload: AirQualityPayload = serde_json::from_str(&text)?;

        Ok(payload)
    }
}

/// Raw air quality API response
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityPayload {
    pub hourly: HourlyAirQuality,
}

/// Hourly parallel arrays, index-aligned
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyAirQuality {
    pub time: Vec<String>,
    pub us_aqi: Vec<Option<f64>>,
}
