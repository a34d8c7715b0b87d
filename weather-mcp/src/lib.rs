//! # weather-mcp
//!
//! An MCP server answering current-weather and forecast questions from
//! OpenWeatherMap.
//!
//! ## Layout
//!
//! - [`registry`]: tool, resource and prompt catalogs, argument validation
//! - [`provider`]: the [`WeatherProvider`] seam and its OpenWeatherMap client
//! - [`forecast`] and [`format`]: day bucketing and text rendering
//! - [`dispatcher`]: tool invocation
//! - [`service`]: the [`McpHandler`](weather_mcp_protocol::McpHandler) tying it together
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weather_mcp::{Config, WeatherService};
//! use weather_mcp_protocol::McpServer;
//!
//! let config = Config::from_env()?;
//! let service = WeatherService::from_config(&config)?;
//! McpServer::new(Arc::new(service)).run_stdio().await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod forecast;
pub mod format;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod registry;
pub mod service;
pub mod telemetry;
pub mod units;

pub use config::{Config, TransportKind};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DomainError, InvalidInvocation};
pub use models::{CurrentConditions, Forecast, ForecastSample};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use registry::CapabilityRegistry;
pub use service::WeatherService;
pub use units::UnitSystem;
