//! Upstream weather providers.

mod openweather;
#[allow(missing_docs)]
pub mod types;

pub use openweather::OpenWeatherClient;

use crate::error::DomainError;
use crate::models::{CurrentConditions, Forecast};
use crate::units::UnitSystem;
use async_trait::async_trait;

/// A source of weather data.
///
/// Every call goes to the network; implementations keep no state between
/// calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Look up current conditions for a place.
    async fn fetch_current(
        &self,
        place: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, DomainError>;

    /// Look up the multi-day forecast for a place.
    async fn fetch_forecast(&self, place: &str, units: UnitSystem)
        -> Result<Forecast, DomainError>;
}
