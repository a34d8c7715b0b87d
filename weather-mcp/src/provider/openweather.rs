//! OpenWeatherMap client.
//!
//! Talks to the `/weather` and `/forecast` endpoints of the 2.5 API,
//! authenticated with the `appid` query parameter.

use super::types::{CurrentResponse, ForecastResponse};
use super::WeatherProvider;
use crate::config::Config;
use crate::error::DomainError;
use crate::models::{CurrentConditions, Forecast};
use crate::units::UnitSystem;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// OpenWeatherMap API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    /// HTTP client.
    client: Client,
    /// Base URL, e.g. `https://api.openweathermap.org/data/2.5`.
    base_url: Url,
    /// API key sent as `appid`.
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        place: &str,
        units: UnitSystem,
    ) -> Result<T, DomainError> {
        debug!(endpoint = path, place, units = %units, "Querying OpenWeatherMap");

        let response = self
            .client
            .get(self.endpoint(path))
            .query(&[
                ("q", place),
                ("appid", self.api_key.as_str()),
                ("units", units.query_value()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = path, error = %e, "Provider request failed");
                DomainError::from(e)
            })?;

        let status = response.status();
        debug!(endpoint = path, status = %status, "Received provider response");

        match status {
            StatusCode::NOT_FOUND => return Err(DomainError::NotFound(place.to_string())),
            StatusCode::UNAUTHORIZED => return Err(DomainError::Unauthorized),
            s if !s.is_success() => {
                warn!(endpoint = path, status = %s, "Provider returned an error status");
                return Err(DomainError::upstream(format!(
                    "provider returned HTTP {}",
                    s.as_u16()
                )));
            }
            _ => {}
        }

        response.json::<T>().await.map_err(|e| {
            warn!(endpoint = path, error = %e, "Failed to decode provider response");
            DomainError::upstream("malformed provider response")
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(
        &self,
        place: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, DomainError> {
        let resp: CurrentResponse = self.get("weather", place, units).await?;
        Ok(resp.into())
    }

    async fn fetch_forecast(
        &self,
        place: &str,
        units: UnitSystem,
    ) -> Result<Forecast, DomainError> {
        let resp: ForecastResponse = self.get("forecast", place, units).await?;
        Forecast::try_from(resp)
    }
}
