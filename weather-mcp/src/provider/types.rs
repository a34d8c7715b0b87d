//! OpenWeatherMap response payloads.
//!
//! Only the fields the server renders are modeled; everything else in the
//! provider's responses is ignored.

use crate::error::DomainError;
use crate::models::{CurrentConditions, Forecast, ForecastSample};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /weather` response.
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub visibility: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct Main {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

/// `GET /forecast` response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: City,
}

#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    /// Unix seconds.
    pub dt: i64,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

fn first_description(conditions: &[Condition]) -> String {
    conditions
        .first()
        .map(|c| c.description.clone())
        .unwrap_or_default()
}

impl From<CurrentResponse> for CurrentConditions {
    fn from(resp: CurrentResponse) -> Self {
        Self {
            description: first_description(&resp.weather),
            place: resp.name,
            country: resp.sys.country,
            temperature: resp.main.temp,
            feels_like: resp.main.feels_like.unwrap_or(resp.main.temp),
            humidity: resp.main.humidity,
            pressure: resp.main.pressure,
            wind_speed: resp.wind.speed,
            visibility_m: resp.visibility,
        }
    }
}

impl TryFrom<ForecastResponse> for Forecast {
    type Error = DomainError;

    fn try_from(resp: ForecastResponse) -> Result<Self, Self::Error> {
        let samples = resp
            .list
            .into_iter()
            .map(|entry| {
                let timestamp = DateTime::<Utc>::from_timestamp(entry.dt, 0).ok_or_else(|| {
                    DomainError::upstream(format!("invalid forecast timestamp {}", entry.dt))
                })?;
                Ok(ForecastSample {
                    timestamp,
                    temperature: entry.main.temp,
                    description: first_description(&entry.weather),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            place: resp.city.name,
            country: resp.city.country,
            samples,
        })
    }
}
