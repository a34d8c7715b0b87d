//! Weather data as the rest of the server sees it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a current-conditions lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Place name as resolved by the provider.
    pub place: String,
    /// ISO 3166 country code.
    pub country: String,
    /// Temperature in the requested unit system.
    pub temperature: f64,
    /// Perceived temperature.
    pub feels_like: f64,
    /// Short description, e.g. "clear sky".
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Atmospheric pressure in hPa.
    pub pressure: u32,
    /// Wind speed (m/s or mph depending on units).
    pub wind_speed: f64,
    /// Visibility in meters.
    pub visibility_m: u32,
}

/// One timestamped forecast record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Forecast time.
    pub timestamp: DateTime<Utc>,
    /// Temperature in the requested unit system.
    pub temperature: f64,
    /// Short description.
    pub description: String,
}

impl ForecastSample {
    /// Create a sample.
    pub fn new(timestamp: DateTime<Utc>, temperature: f64, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            temperature,
            description: description.into(),
        }
    }
}

/// Forecast samples plus the place they were resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Place name as resolved by the provider.
    pub place: String,
    /// ISO 3166 country code.
    pub country: String,
    /// Samples in provider order.
    pub samples: Vec<ForecastSample>,
}
