//! Plain-text rendering of a weather bundle
//!
//! Pure presentation: formats the normalized records for the terminal and
//! touches nothing else. Optional series that the lookup could not fill are
//! simply skipped.

use std::fmt::Write;

use crate::data::WeatherBundle;

/// Renders the whole bundle as display text
pub fn render_bundle(bundle: &WeatherBundle) -> String {
    let mut out = String::new();

    let current = &bundle.current;
    let _ = writeln!(out, "{}", current.city);
    let _ = writeln!(out, "  {}°F  {}", current.temperature, current.condition);
    let _ = writeln!(
        out,
        "  Humidity {}%   Wind {} mph",
        current.humidity, current.wind_speed
    );

    let _ = writeln!(out, "\n5-Day Forecast");
    for day in &bundle.forecast {
        let _ = writeln!(
            out,
            "  {:<9}  {}  {:>3}°/{:>3}°  {}",
            day.day_of_week, day.date, day.high, day.low, day.condition
        );
    }

    let _ = writeln!(out, "\nAir Quality (US AQI)");
    for day in &bundle.air_quality {
        let _ = writeln!(
            out,
            "  {:<9}  {}  {:>3}  {}",
            day.day_of_week, day.date, day.aqi, day.category
        );
    }

    if let Some(uv_forecast) = &bundle.uv_forecast {
        let _ = writeln!(out, "\nUV Index");
        for day in uv_forecast {
            let _ = writeln!(
                out,
                "  {:<9}  {}  {:>4.1}  {}",
                day.day_of_week, day.date, day.uv_index, day.category
            );
        }
    }

    if let Some(precipitation) = &bundle.precipitation {
        let _ = writeln!(out, "\nPrecipitation");
        for day in precipitation {
            let _ = writeln!(
                out,
                "  {:<9}  {}  {:>5.2} in  {:>3}%",
                day.day_of_week, day.date, day.amount, day.probability
            );
        }
    }

    if let Some(sun_moon) = &bundle.sun_moon {
        let _ = writeln!(out, "\nSun & Sky");
        let _ = writeln!(
            out,
            "  Sunrise {}   Sunset {}   Current UV {:.1}",
            sun_moon.sunrise.format("%-I:%M %p"),
            sun_moon.sunset.format("%-I:%M %p"),
            sun_moon.current_uv
        );
    }

    out
}
