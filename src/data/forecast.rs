//! Open-Meteo forecast API client
//!
//! Fetches current conditions plus a 6-day daily forecast (today + 5 future
//! days) in Fahrenheit/mph/inches, and parses it into the raw payload
//! structure consumed by normalization.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Coordinate;

/// Base URL for the Open-Meteo forecast API
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Daily variables requested alongside the current conditions
const DAILY_VARIABLES: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
uv_index_max,precipitation_sum,precipitation_probability_max,sunrise,sunset";

/// Current-condition variables requested
const CURRENT_VARIABLES: &str =
    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed or returned a non-success status
    #[error("Forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse the JSON response
    #[error("Failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Creates a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: FORECAST_BASE_URL.to_string(),
        }
    }

    /// Creates a new ForecastClient against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the raw forecast payload for the given position
    ///
    /// Requests a 6-day window: index 0 of every daily array is today, and
    /// normalization windows the arrays down to the 5 future days.
    pub async fn fetch(&self, coordinate: Coordinate) -> Result<ForecastPayload, ForecastError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&daily={}\
             &temperature_unit=fahrenheit&wind_speed_unit=mph&precipitation_unit=inch\
             &timezone=auto&forecast_days=6",
            self.base_url, coordinate.latitude, coordinate.longitude, CURRENT_VARIABLES,
            DAILY_VARIABLES
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&text)?;

        Ok(payload)
    }
}

/// Raw forecast API response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentBlock,
    pub daily: DailyBlock,
}

/// Scalar current-condition fields
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: u16,
    pub wind_speed_10m: f64,
}

/// Daily parallel arrays; index `i` refers to the same calendar day across
/// all of them. The optional arrays may be absent from older responses.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub weather_code: Vec<u16>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub uv_index_max: Option<Vec<f64>>,
    #[serde(default)]
    pub precipitation_sum: Option<Vec<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunrise: Option<Vec<String>>,
    #[serde(default)]
    pub sunset: Option<Vec<String>>,
}
