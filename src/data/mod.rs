//! Core data models for Skycast
//!
//! This module contains the display-ready record types produced by one
//! lookup, plus the API clients and normalization helpers that build them.
//! Every record is constructed fresh per lookup and never mutated; a new
//! lookup replaces the previous bundle wholesale.

pub mod air_quality;
pub mod align;
pub mod categories;
pub mod forecast;
pub mod geocode;
pub mod normalize;

pub use air_quality::{AirQualityClient, AirQualityError, AirQualityPayload};
pub use categories::{
    aqi_category, celsius_to_fahrenheit, condition_from_code, uv_category, Category,
};
pub use forecast::{ForecastClient, ForecastError, ForecastPayload};
pub use geocode::{GeocodeClient, GeocodeError};
pub use normalize::{assemble_bundle, NormalizeError};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A resolved place: display name plus position
///
/// Produced once per lookup by geocoding (or directly from user-supplied
/// coordinates) and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Human-readable name, e.g. "Vancouver, Canada"
    pub display_name: String,
    /// Position used for the weather and air-quality fetches
    pub coordinate: Coordinate,
}

/// Snapshot of current conditions at the looked-up location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Resolved display name for the location
    pub city: String,
    /// Temperature in whole degrees Fahrenheit
    pub temperature: i32,
    /// Condition label derived from the weather code
    pub condition: &'static str,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in whole mph
    pub wind_speed: i32,
    /// Raw WMO weather code
    pub weather_code: u16,
}

/// One future calendar day of the temperature/condition forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// English weekday name
    pub day_of_week: String,
    /// Daily high in whole degrees Fahrenheit
    pub high: i32,
    /// Daily low in whole degrees Fahrenheit
    pub low: i32,
    /// Raw WMO weather code
    pub weather_code: u16,
    /// Condition label derived from the weather code
    pub condition: &'static str,
}

/// One future calendar day of air quality
///
/// `aqi` is the rounded mean of that day's non-null hourly readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiDay {
    pub date: String,
    pub day_of_week: String,
    pub aqi: i32,
    pub category: &'static str,
    pub color: &'static str,
}

/// One future calendar day of UV forecast (daily maximum index)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvDay {
    pub date: String,
    pub day_of_week: String,
    pub uv_index: f64,
    pub category: &'static str,
    pub color: &'static str,
}

/// One future calendar day of precipitation forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationDay {
    pub date: String,
    pub day_of_week: String,
    /// Expected precipitation in inches
    pub amount: f64,
    /// Chance of precipitation as a percentage (0-100)
    pub probability: i32,
}

/// Today's sun times and current UV index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunMoon {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    pub current_uv: f64,
}

/// Everything one lookup produces
///
/// All per-day series cover the same 5 consecutive calendar dates, starting
/// the day after the request ("tomorrow" is index 0; today is excluded).
/// The UV, sun, and precipitation fields are `None` when the upstream
/// response omits their daily arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub air_quality: Vec<AqiDay>,
    pub uv_forecast: Option<Vec<UvDay>>,
    pub sun_moon: Option<SunMoon>,
    pub precipitation: Option<Vec<PrecipitationDay>>,
}
