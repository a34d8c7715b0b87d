//! Text rendering of lookup results.

use crate::forecast::DailyBucket;
use crate::models::CurrentConditions;
use crate::units::UnitSystem;
use chrono::{Local, TimeZone};
use std::fmt::Write;

/// Render current conditions.
pub fn format_current(current: &CurrentConditions, units: UnitSystem) -> String {
    let symbol = units.symbol();
    let mut out = String::new();

    let _ = writeln!(out, "Current weather in {}:", location(&current.place, &current.country));
    let _ = writeln!(out, "Temperature: {}{}", current.temperature, symbol);
    let _ = writeln!(out, "Feels like: {}{}", current.feels_like, symbol);
    let _ = writeln!(out, "Description: {}", current.description);
    let _ = writeln!(out, "Humidity: {}%", current.humidity);
    let _ = writeln!(out, "Pressure: {} hPa", current.pressure);
    let _ = writeln!(
        out,
        "Wind speed: {} {}",
        current.wind_speed,
        units.wind_speed_unit()
    );
    let _ = write!(
        out,
        "Visibility: {} km",
        f64::from(current.visibility_m) / 1000.0
    );

    out
}

/// Render a bucketed forecast, times shown in the server's local zone.
pub fn format_forecast(
    place: &str,
    country: &str,
    buckets: &[DailyBucket],
    units: UnitSystem,
) -> String {
    format_forecast_in(place, country, buckets, units, &Local)
}

/// Render a bucketed forecast, times shown in `tz`.
pub fn format_forecast_in<Tz>(
    place: &str,
    country: &str,
    buckets: &[DailyBucket],
    units: UnitSystem,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = format!("5-day forecast for {}:", location(place, country));

    for bucket in buckets {
        out.push_str("\n\n");
        let _ = write!(out, "{}:", bucket.day.format("%A, %B %-d"));
        for sample in &bucket.samples {
            let _ = write!(
                out,
                "\n  {} - {}{}, {}",
                sample.timestamp.with_timezone(tz).format("%H:%M"),
                sample.temperature,
                units.symbol(),
                sample.description
            );
        }
    }

    out
}

fn location(place: &str, country: &str) -> String {
    if country.is_empty() {
        place.to_string()
    } else {
        format!("{}, {}", place, country)
    }
}
