//! Category banding for weather codes, air quality, and UV index
//!
//! All three classifications share the same shape: an ordered table of
//! `(upper_bound, label, color)` bands checked in ascending order, where the
//! first band whose upper bound is not exceeded wins. Values past the last
//! band saturate into a fixed fallback.

/// A discrete category with its display color (hex string)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Human-readable category label
    pub label: &'static str,
    /// Display color as a CSS hex string
    pub color: &'static str,
}

/// One band of a classification table: values `<= upper` map to `category`
struct Band {
    upper: f64,
    category: Category,
}

/// WMO weather code bands, checked ascending, first match wins
const CONDITION_BANDS: &[(u16, &str)] = &[
    (0, "Clear"),
    (3, "Partly Cloudy"),
    (49, "Foggy"),
    (59, "Drizzle"),
    (69, "Rainy"),
    (79, "Snowy"),
    (84, "Showers"),
    (99, "Thunderstorm"),
];

/// US AQI bands (EPA breakpoints)
const AQI_BANDS: &[Band] = &[
    Band { upper: 50.0, category: Category { label: "Good", color: "#22c55e" } },
    Band { upper: 100.0, category: Category { label: "Moderate", color: "#eab308" } },
    Band { upper: 150.0, category: Category { label: "Unhealthy for Sensitive", color: "#f97316" } },
    Band { upper: 200.0, category: Category { label: "Unhealthy", color: "#ef4444" } },
    Band { upper: 300.0, category: Category { label: "Very Unhealthy", color: "#a855f7" } },
];

const AQI_FALLBACK: Category = Category { label: "Hazardous", color: "#7f1d1d" };

/// UV index bands (WHO scale)
const UV_BANDS: &[Band] = &[
    Band { upper: 2.0, category: Category { label: "Low", color: "#22c55e" } },
    Band { upper: 5.0, category: Category { label: "Moderate", color: "#eab308" } },
    Band { upper: 7.0, category: Category { label: "High", color: "#f97316" } },
    Band { upper: 10.0, category: Category { label: "Very High", color: "#ef4444" } },
];

const UV_FALLBACK: Category = Category { label: "Extreme", color: "#a855f7" };

/// Returns the first band whose upper bound the value does not exceed
fn classify(bands: &'static [Band], fallback: Category, value: f64) -> Category {
    bands
        .iter()
        .find(|band| value <= band.upper)
        .map(|band| band.category)
        .unwrap_or(fallback)
}

/// Maps a WMO weather code to a condition label
///
/// Codes outside the known 0-99 range map to "Unknown".
pub fn condition_from_code(code: u16) -> &'static str {
    CONDITION_BANDS
        .iter()
        .find(|(upper, _)| code <= *upper)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

/// Classifies a US AQI value into an EPA category and color
pub fn aqi_category(aqi: i32) -> Category {
    classify(AQI_BANDS, AQI_FALLBACK, aqi as f64)
}

/// Classifies a UV index into a WHO category and color
pub fn uv_category(uv: f64) -> Category {
    classify(UV_BANDS, UV_FALLBACK, uv)
}

/// Converts Celsius to Fahrenheit, rounded to the nearest whole degree
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}
