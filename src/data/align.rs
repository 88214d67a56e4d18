//! Time-series alignment helpers
//!
//! The upstream APIs return a 6-day window (today plus 5 future days) at two
//! granularities: daily parallel arrays for the forecast, hourly readings for
//! air quality. These helpers reduce both to the same shape: 5 future
//! calendar days, keyed consistently by date.

use chrono::NaiveDate;

/// Number of leading entries (today) dropped from every daily series
pub const FORECAST_WINDOW_SKIP: usize = 1;

/// Number of future days retained in every daily series
pub const FORECAST_WINDOW_DAYS: usize = 5;

/// Groups hourly readings into per-calendar-day rounded averages
///
/// Each timestamp is bucketed by its `YYYY-MM-DD` prefix. Null readings are
/// discarded; a date with no valid readings does not appear in the output.
/// Dates are returned in first-seen order, which downstream windowing
/// depends on.
///
/// # Arguments
/// * `times` - Hourly ISO 8601 timestamps (e.g., "2024-07-15T13:00")
/// * `values` - Readings aligned index-for-index with `times`; `None` marks
///   a missing reading
pub fn group_hourly_to_daily_average(
    times: &[String],
    values: &[Option<f64>],
) -> Vec<(String, i32)> {
    let mut buckets: Vec<(String, Vec<f64>)> = Vec::new();

    for (time, value) in times.iter().zip(values.iter()) {
        let Some(value) = value else {
            continue;
        };

        let date = time.split('T').next().unwrap_or(time);
        match buckets.iter_mut().find(|(d, _)| d.as_str() == date) {
            Some((_, readings)) => readings.push(*value),
            None => buckets.push((date.to_string(), vec![*value])),
        }
    }

    buckets
        .into_iter()
        .map(|(date, readings)| {
            let mean = readings.iter().sum::<f64>() / readings.len() as f64;
            (date, mean.round() as i32)
        })
        .collect()
}

/// Selects the 5-future-day forecast window from a daily series
///
/// Drops the leading entry (today) and returns the next five. Applied
/// uniformly to every daily array so all derived series cover the same
/// dates.
pub fn select_forecast_window<T: Clone>(series: &[T]) -> Vec<T> {
    series
        .iter()
        .skip(FORECAST_WINDOW_SKIP)
        .take(FORECAST_WINDOW_DAYS)
        .cloned()
        .collect()
}

/// Returns the English weekday name for a `YYYY-MM-DD` date string
///
/// Unparseable dates return an empty string rather than failing; the date
/// itself is still displayed alongside.
pub fn day_of_week(date_str: &str) -> String {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(|date| date.format("%A").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly_times(date: &str, hours: usize) -> Vec<String> {
        (0..hours).map(|h| format!("{}T{:02}:00", date, h)).collect()
    }

    #[test]
    fn test_group_single_day_constant_values() {
        let times = hourly_times("2024-07-15", 24);
        let values: Vec<Option<f64>> = vec![Some(42.0); 24];

        let daily = group_hourly_to_daily_average(&times, &values);

        assert_eq!(daily, vec![("2024-07-15".to_string(), 42)]);
    }

    #[test]
    fn test_group_averages_and_rounds() {
        let times = hourly_times("2024-07-15", 4);
        let values = vec![Some(10.0), Some(11.0), Some(11.0), Some(11.0)];

        let daily = group_hourly_to_daily_average(&times, &values);

        // Mean is 10.75, rounds to 11
        assert_eq!(daily, vec![("2024-07-15".to_string(), 11)]);
    }

    #[test]
    fn test_group_discards_null_readings() {
        let times = hourly_times("2024-07-15", 4);
        let values = vec![Some(20.0), None, Some(40.0), None];

        let daily = group_hourly_to_daily_average(&times, &values);

        // Only the two valid readings contribute to the mean
        assert_eq!(daily, vec![("2024-07-15".to_string(), 30)]);
    }

    #[test]
    fn test_group_omits_dates_with_no_valid_readings() {
        let mut times = hourly_times("2024-07-15", 2);
        times.extend(hourly_times("2024-07-16", 2));
        let values = vec![Some(50.0), Some(50.0), None, None];

        let daily = group_hourly_to_daily_average(&times, &values);

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].0, "2024-07-15");
    }

    #[test]
    fn test_group_preserves_first_seen_date_order() {
        let mut times = hourly_times("2024-07-15", 2);
        times.extend(hourly_times("2024-07-16", 2));
        times.extend(hourly_times("2024-07-17", 2));
        let values = vec![Some(10.0); 6];

        let daily = group_hourly_to_daily_average(&times, &values);

        let dates: Vec<&str> = daily.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-07-15", "2024-07-16", "2024-07-17"]);
    }

    #[test]
    fn test_group_empty_input() {
        let daily = group_hourly_to_daily_average(&[], &[]);
        assert!(daily.is_empty());
    }

    #[test]
    fn test_window_drops_today_and_takes_five() {
        let series = vec!["d0", "d1", "d2", "d3", "d4", "d5"];

        let window = select_forecast_window(&series);

        assert_eq!(window, vec!["d1", "d2", "d3", "d4", "d5"]);
    }

    #[test]
    fn test_window_short_series_returns_what_remains() {
        let series = vec![1, 2, 3];
        assert_eq!(select_forecast_window(&series), vec![2, 3]);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        assert_eq!(day_of_week("2024-07-15"), "Monday");
        assert_eq!(day_of_week("2024-07-21"), "Sunday");
        assert_eq!(day_of_week("2024-12-25"), "Wednesday");
    }

    #[test]
    fn test_day_of_week_invalid_date() {
        assert_eq!(day_of_week("not a date"), "");
    }
}
