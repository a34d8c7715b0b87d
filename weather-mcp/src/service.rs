//! The weather server's [`McpHandler`].

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::prompts;
use crate::provider::{OpenWeatherClient, WeatherProvider};
use crate::registry::CapabilityRegistry;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use weather_mcp_protocol::{
    CallToolResult, GetPromptResult, Implementation, McpHandler, McpResult, McpTool, Prompt,
    ReadResourceResult, Resource,
};

/// Name reported during `initialize`.
pub const SERVER_NAME: &str = "weather-mcp-server";

const INSTRUCTIONS: &str = "Use get_weather for current conditions and get_forecast for a \
     5-day forecast. Both take a city name and optional units (metric, imperial or kelvin).";

/// Weather lookups exposed as MCP tools, resources and prompts.
#[derive(Debug)]
pub struct WeatherService<P = OpenWeatherClient> {
    registry: Arc<CapabilityRegistry>,
    dispatcher: Dispatcher<P>,
}

impl WeatherService<OpenWeatherClient> {
    /// Build a service backed by OpenWeatherMap.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = OpenWeatherClient::new(config)?;
        Ok(Self::new(client, !config.is_demo()))
    }
}

impl<P: WeatherProvider> WeatherService<P> {
    /// Build a service around any provider.
    pub fn new(provider: P, api_key_configured: bool) -> Self {
        let registry = Arc::new(CapabilityRegistry::new(api_key_configured));
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&registry), provider),
            registry,
        }
    }
}

#[async_trait]
impl<P: WeatherProvider + 'static> McpHandler for WeatherService<P> {
    fn server_info(&self) -> Implementation {
        Implementation::new(SERVER_NAME, env!("CARGO_PKG_VERSION"))
    }

    fn instructions(&self) -> Option<String> {
        Some(INSTRUCTIONS.to_string())
    }

    fn list_tools(&self) -> Vec<McpTool> {
        self.registry.list_tools()
    }

    async fn call_tool(&self, name: &str, arguments: JsonValue) -> CallToolResult {
        self.dispatcher.invoke(name, &arguments).await
    }

    fn list_resources(&self) -> Vec<Resource> {
        self.registry.list_resources()
    }

    async fn read_resource(&self, uri: &str) -> McpResult<ReadResourceResult> {
        self.registry.read_resource(uri)
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        self.registry.list_prompts()
    }

    async fn get_prompt(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> McpResult<GetPromptResult> {
        prompts::get_prompt(name, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::provider::MockWeatherProvider;
    use crate::registry::API_STATUS_URI;
    use serde_json::json;
    use weather_mcp_protocol::{JsonRpcRequest, McpServer};
    use wiremock::matchers::{path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server(provider: MockWeatherProvider) -> McpServer {
        McpServer::new(Arc::new(WeatherService::new(provider, false)))
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let response = server(MockWeatherProvider::new())
            .handle_request(JsonRpcRequest::new(1_i64, "initialize").with_params(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "1.0"}
            })))
            .await;

        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(result["instructions"].as_str().unwrap().contains("get_forecast"));
    }

    #[tokio::test]
    async fn test_catalogs_over_json_rpc() {
        let server = server(MockWeatherProvider::new());

        let tools = server
            .handle_request(JsonRpcRequest::new(1_i64, "tools/list"))
            .await
            .result
            .unwrap();
        let names: Vec<&str> = tools["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec!["get_weather", "get_forecast"]);

        let resources = server
            .handle_request(JsonRpcRequest::new(2_i64, "resources/list"))
            .await
            .result
            .unwrap();
        assert_eq!(resources["resources"].as_array().unwrap().len(), 2);

        let prompts = server
            .handle_request(JsonRpcRequest::new(3_i64, "prompts/list"))
            .await
            .result
            .unwrap();
        assert_eq!(prompts["prompts"][0]["name"], "weather_summary");
    }

    #[tokio::test]
    async fn test_tool_failure_is_not_a_protocol_error() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .returning(|place, _| Err(DomainError::NotFound(place.to_string())));

        let response = server(provider)
            .handle_request(JsonRpcRequest::new(7_i64, "tools/call").with_params(json!({
                "name": "get_weather",
                "arguments": {"city": "Atlantis"}
            })))
            .await;

        assert!(!response.is_error());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_read_status_resource() {
        let response = server(MockWeatherProvider::new())
            .handle_request(
                JsonRpcRequest::new(4_i64, "resources/read").with_params(json!({"uri": API_STATUS_URI})),
            )
            .await;

        let result = response.result.unwrap();
        let body: JsonValue =
            serde_json::from_str(result["contents"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(body["apiKey"], "demo");
    }

    #[tokio::test]
    async fn test_unknown_prompt_is_protocol_error() {
        let response = server(MockWeatherProvider::new())
            .handle_request(
                JsonRpcRequest::new(5_i64, "prompts/get").with_params(json!({"name": "limerick"})),
            )
            .await;
        assert!(response.is_error());
    }

    #[tokio::test]
    async fn test_from_config_against_stub_provider() {
        let upstream = MockServer::start().await;
        Mock::given(path("/weather"))
            .and(query_param("appid", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Berlin",
                "sys": {"country": "DE"},
                "main": {"temp": 11.0, "feels_like": 9.5, "humidity": 81, "pressure": 1009},
                "weather": [{"description": "overcast clouds"}],
                "wind": {"speed": 4.2},
                "visibility": 8000
            })))
            .mount(&upstream)
            .await;

        let config = Config::default()
            .with_api_key("secret")
            .with_base_url(url::Url::parse(&upstream.uri()).unwrap());
        let service = WeatherService::from_config(&config).unwrap();

        let result = service
            .call_tool("get_weather", json!({"city": "Berlin"}))
            .await;
        assert!(!result.is_error);
        assert!(result.text_content().contains("Visibility: 8 km"));
    }
}
