//! Server configuration.
//!
//! Configuration is read once at startup into a [`Config`] value that is
//! handed to the components that need it.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

/// Placeholder API key meaning "no credential configured".
pub const DEMO_API_KEY: &str = "demo_key";

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// How the server talks to its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    #[default]
    Stdio,
    /// JSON-RPC over HTTP.
    Http,
}

impl std::str::FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::InvalidTransport(s.to_string())),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Provider base URL.
    pub base_url: Url,
    /// HTTP listen port.
    pub port: u16,
    /// Selected transport.
    pub transport: TransportKind,
    /// Timeout for provider requests; `None` keeps the client default.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: default_base_url(),
            port: DEFAULT_PORT,
            transport: TransportKind::default(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `OPENWEATHER_API_KEY`, `OPENWEATHER_BASE_URL`, `PORT`,
    /// `MCP_TRANSPORT` and `OPENWEATHER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("OPENWEATHER_API_KEY") {
            config.api_key = key;
        }
        if let Some(url) = lookup("OPENWEATHER_BASE_URL") {
            config.base_url = Url::parse(url.trim())?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(transport) = lookup("MCP_TRANSPORT") {
            config.transport = transport.parse()?;
        }
        if let Some(secs) = lookup("OPENWEATHER_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(secs.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the provider base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the provider request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether no real credential is configured.
    pub fn is_demo(&self) -> bool {
        self.api_key.trim().is_empty() || self.api_key == DEMO_API_KEY
    }

    /// Address the HTTP transport listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
