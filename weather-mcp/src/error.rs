//! Error types.

use thiserror::Error;

/// Failure of an upstream weather lookup.
///
/// Messages are user-facing; transport internals stay behind the provider
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The provider does not know the place.
    #[error("City \"{0}\" not found. Please check the spelling and try again.")]
    NotFound(String),

    /// The provider rejected the API key.
    #[error("Invalid API key. Please check your OpenWeatherMap API key configuration.")]
    Unauthorized,

    /// Any other network, status or decoding failure.
    #[error("Error fetching weather data: {0}")]
    UpstreamFailure(String),
}

impl DomainError {
    /// Create an upstream failure.
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::UpstreamFailure(detail.into())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "could not connect to provider"
        } else if err.is_decode() {
            "malformed provider response"
        } else {
            "request failed"
        };
        Self::UpstreamFailure(detail.to_string())
    }
}

/// Tool call rejected before any lookup was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInvocation {
    /// No tool with this name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments were not a JSON object.
    #[error("arguments must be an object")]
    ArgumentsNotObject,

    /// A required argument is absent.
    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    /// An argument has the wrong shape.
    #[error("argument '{name}' must be {expected}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// What was expected instead.
        expected: &'static str,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is not a valid port number.
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// `MCP_TRANSPORT` names an unknown transport.
    #[error("invalid transport '{0}', expected 'stdio' or 'http'")]
    InvalidTransport(String),

    /// `OPENWEATHER_BASE_URL` is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// `OPENWEATHER_TIMEOUT_SECS` is not a whole number of seconds.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}
