//! Tool invocation: validate, look up, render.

use crate::error::DomainError;
use crate::forecast::bucket_by_day;
use crate::format::{format_current, format_forecast};
use crate::provider::WeatherProvider;
use crate::registry::{CapabilityRegistry, Invocation, ToolName};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, info, warn};
use weather_mcp_protocol::CallToolResult;

/// Routes validated tool calls to the provider and renders the answers.
///
/// Every failure ends up inside the returned [`CallToolResult`] with
/// `is_error` set; nothing here fails the surrounding JSON-RPC request.
#[derive(Debug)]
pub struct Dispatcher<P> {
    registry: Arc<CapabilityRegistry>,
    provider: P,
}

impl<P: WeatherProvider> Dispatcher<P> {
    /// Create a dispatcher.
    pub fn new(registry: Arc<CapabilityRegistry>, provider: P) -> Self {
        Self { registry, provider }
    }

    /// Invoke a tool by name.
    pub async fn invoke(&self, name: &str, arguments: &JsonValue) -> CallToolResult {
        let invocation = match self.registry.validate_invocation(name, arguments) {
            Ok(inv) => inv,
            Err(e) => {
                debug!(tool = name, error = %e, "Rejected tool call");
                return CallToolResult::error(format!("Invalid arguments: {}", e));
            }
        };

        info!(
            tool = invocation.tool.as_str(),
            city = %invocation.city,
            units = %invocation.units,
            "Invoking tool"
        );

        match self.run(&invocation).await {
            Ok(text) => CallToolResult::text(text),
            Err(e) => {
                warn!(
                    tool = invocation.tool.as_str(),
                    city = %invocation.city,
                    error = %e,
                    "Weather lookup failed"
                );
                CallToolResult::error(e.to_string())
            }
        }
    }

    async fn run(&self, invocation: &Invocation) -> Result<String, DomainError> {
        let Invocation { tool, city, units } = invocation;

        match tool {
            ToolName::GetWeather => {
                let current = self.provider.fetch_current(city, *units).await?;
                Ok(format_current(&current, *units))
            }
            ToolName::GetForecast => {
                let forecast = self.provider.fetch_forecast(city, *units).await?;
                let buckets = bucket_by_day(&forecast.samples);
                Ok(format_forecast(
                    &forecast.place,
                    &forecast.country,
                    &buckets,
                    *units,
                ))
            }
        }
    }
}
