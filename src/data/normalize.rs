//! Raw payload normalization
//!
//! Pure assembly of one `WeatherBundle` from the two raw API payloads and a
//! resolved display name. This is where the 6-day upstream window becomes
//! the uniform 5-future-day shape: every daily series drops today and keeps
//! the next five calendar days.

use chrono::NaiveTime;
use thiserror::Error;

use super::align::{group_hourly_to_daily_average, select_forecast_window};
use super::categories::{aqi_category, condition_from_code, uv_category};
use super::{
    align, AirQualityPayload, AqiDay, CurrentConditions, ForecastDay, ForecastPayload,
    PrecipitationDay, SunMoon, UvDay, WeatherBundle,
};

/// Errors produced when a payload cannot be normalized
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The daily parallel arrays disagree on length
    #[error("Forecast daily arrays have inconsistent lengths")]
    InconsistentDailyArrays,
}

/// Assembles a complete bundle from the raw payloads
///
/// Fails if the mandatory daily arrays are not index-aligned; the
/// supplemental series (UV, sun times, precipitation) are best-effort and
/// come back as `None` when their arrays are absent or unusable.
///
/// # Arguments
/// * `city` - Resolved display name for the location
/// * `forecast` - Raw forecast payload (current scalars + daily arrays)
/// * `air_quality` - Raw hourly AQI payload
pub fn assemble_bundle(
    city: String,
    forecast: &ForecastPayload,
    air_quality: &AirQualityPayload,
) -> Result<WeatherBundle, NormalizeError> {
    let daily = &forecast.daily;
    let len = daily.time.len();

    if daily.weather_code.len() != len
        || daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
    {
        return Err(NormalizeError::InconsistentDailyArrays);
    }

    let current = CurrentConditions {
        city,
        temperature: forecast.current.temperature_2m.round() as i32,
        condition: condition_from_code(forecast.current.weather_code),
        humidity: forecast.current.relative_humidity_2m.round() as u8,
        wind_speed: forecast.current.wind_speed_10m.round() as i32,
        weather_code: forecast.current.weather_code,
    };

    Ok(WeatherBundle {
        current,
        forecast: forecast_days(forecast),
        air_quality: aqi_days(air_quality),
        uv_forecast: uv_days(forecast),
        sun_moon: sun_moon(forecast),
        precipitation: precipitation_days(forecast),
    })
}

/// Builds the 5-day temperature/condition forecast
fn forecast_days(forecast: &ForecastPayload) -> Vec<ForecastDay> {
    let daily = &forecast.daily;
    let dates = select_forecast_window(&daily.time);
    let codes = select_forecast_window(&daily.weather_code);
    let highs = select_forecast_window(&daily.temperature_2m_max);
    let lows = select_forecast_window(&daily.temperature_2m_min);

    dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let day_of_week = align::day_of_week(&date);
            ForecastDay {
                day_of_week,
                high: highs[i].round() as i32,
                low: lows[i].round() as i32,
                weather_code: codes[i],
                condition: condition_from_code(codes[i]),
                date,
            }
        })
        .collect()
}

/// Builds the 5-day AQI series from hourly readings
///
/// Hourly readings collapse to per-date rounded means first; the date keys
/// are then windowed in their observed order, exactly like the daily
/// forecast arrays.
fn aqi_days(air_quality: &AirQualityPayload) -> Vec<AqiDay> {
    let daily = group_hourly_to_daily_average(
        &air_quality.hourly.time,
        &air_quality.hourly.us_aqi,
    );

    select_forecast_window(&daily)
        .into_iter()
        .map(|(date, aqi)| {
            let category = aqi_category(aqi);
            AqiDay {
                day_of_week: align::day_of_week(&date),
                date,
                aqi,
                category: category.label,
                color: category.color,
            }
        })
        .collect()
}

/// Builds the 5-day UV series, when the daily UV array is usable
fn uv_days(forecast: &ForecastPayload) -> Option<Vec<UvDay>> {
    let daily = &forecast.daily;
    let uv = daily.uv_index_max.as_ref()?;
    if uv.len() != daily.time.len() {
        return None;
    }

    let dates = select_forecast_window(&daily.time);
    let values = select_forecast_window(uv);

    Some(
        dates
            .into_iter()
            .zip(values)
            .map(|(date, uv_index)| {
                let category = uv_category(uv_index);
                UvDay {
                    day_of_week: align::day_of_week(&date),
                    date,
                    uv_index,
                    category: category.label,
                    color: category.color,
                }
            })
            .collect(),
    )
}

/// Builds the 5-day precipitation series, when both daily arrays are usable
///
/// A null probability reading counts as 0% rather than dropping the day, so
/// the series keeps the shared 5-day shape.
fn precipitation_days(forecast: &ForecastPayload) -> Option<Vec<PrecipitationDay>> {
    let daily = &forecast.daily;
    let amounts = daily.precipitation_sum.as_ref()?;
    let probabilities = daily.precipitation_probability_max.as_ref()?;
    if amounts.len() != daily.time.len() || probabilities.len() != daily.time.len() {
        return None;
    }

    let dates = select_forecast_window(&daily.time);
    let amounts = select_forecast_window(amounts);
    let probabilities = select_forecast_window(probabilities);

    Some(
        dates
            .into_iter()
            .enumerate()
            .map(|(i, date)| PrecipitationDay {
                day_of_week: align::day_of_week(&date),
                date,
                amount: amounts[i],
                probability: probabilities[i].map(|p| p.round() as i32).unwrap_or(0),
            })
            .collect(),
    )
}

/// Extracts today's sun times and UV index, when present
fn sun_moon(forecast: &ForecastPayload) -> Option<SunMoon> {
    let daily = &forecast.daily;
    let sunrise = parse_time(daily.sunrise.as_ref()?.first()?)?;
    let sunset = parse_time(daily.sunset.as_ref()?.first()?)?;
    let current_uv = *daily.uv_index_max.as_ref()?.first()?;

    Some(SunMoon {
        sunrise,
        sunset,
        current_uv,
    })
}

/// Parses the time portion of an ISO 8601 datetime (e.g. "2024-07-15T05:30")
fn parse_time(datetime: &str) -> Option<NaiveTime> {
    let time_part = datetime.split('T').nth(1)?;
    NaiveTime::parse_from_str(time_part, "%H:%M").ok()
}
