//! Capability catalogs and invocation validation.
//!
//! The catalogs are built once when the registry is created and never
//! change afterwards.

use crate::error::InvalidInvocation;
use crate::units::UnitSystem;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value as JsonValue};
use weather_mcp_protocol::{
    McpError, McpResult, McpTool, Prompt, PromptArgument, ReadResourceResult, Resource,
    ResourceContent,
};

/// URI of the popular cities resource.
pub const POPULAR_CITIES_URI: &str = "weather://cities/popular";

/// URI of the API status resource.
pub const API_STATUS_URI: &str = "weather://api/status";

/// Names served by the popular cities resource.
pub const POPULAR_CITIES: [&str; 10] = [
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Berlin",
    "Moscow",
    "Dubai",
    "Singapore",
    "Toronto",
];

/// Tools the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    /// `get_weather`
    GetWeather,
    /// `get_forecast`
    GetForecast,
}

impl ToolName {
    /// Wire name of the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetWeather => "get_weather",
            Self::GetForecast => "get_forecast",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "get_weather" => Some(Self::GetWeather),
            "get_forecast" => Some(Self::GetForecast),
            _ => None,
        }
    }
}

/// A tool call that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Which tool.
    pub tool: ToolName,
    /// Place to look up, non-empty.
    pub city: String,
    /// Requested unit system.
    pub units: UnitSystem,
}

/// Static tool, resource and prompt catalogs.
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    tools: Vec<McpTool>,
    resources: Vec<Resource>,
    prompts: Vec<Prompt>,
    api_key_configured: bool,
}

impl CapabilityRegistry {
    /// Build the catalogs.
    ///
    /// `api_key_configured` is reported by the API status resource.
    pub fn new(api_key_configured: bool) -> Self {
        Self {
            tools: tool_catalog(),
            resources: resource_catalog(),
            prompts: prompt_catalog(),
            api_key_configured,
        }
    }

    /// The tool catalog.
    pub fn list_tools(&self) -> Vec<McpTool> {
        self.tools.clone()
    }

    /// The resource catalog.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// The prompt catalog.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.clone()
    }

    /// Check a tool call against the catalog.
    pub fn validate_invocation(
        &self,
        name: &str,
        arguments: &JsonValue,
    ) -> Result<Invocation, InvalidInvocation> {
        let tool = ToolName::from_name(name)
            .ok_or_else(|| InvalidInvocation::UnknownTool(name.to_string()))?;

        let empty = Map::new();
        let args = match arguments {
            JsonValue::Object(map) => map,
            JsonValue::Null => &empty,
            _ => return Err(InvalidInvocation::ArgumentsNotObject),
        };

        let city = match args.get("city") {
            None | Some(JsonValue::Null) => return Err(InvalidInvocation::MissingArgument("city")),
            Some(JsonValue::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(JsonValue::String(_)) => {
                return Err(InvalidInvocation::InvalidArgument {
                    name: "city",
                    expected: "a non-empty string",
                })
            }
            Some(_) => {
                return Err(InvalidInvocation::InvalidArgument {
                    name: "city",
                    expected: "a string",
                })
            }
        };

        let units = match args.get("units") {
            None | Some(JsonValue::Null) => UnitSystem::default(),
            Some(JsonValue::String(s)) => {
                s.parse::<UnitSystem>().map_err(|_| InvalidInvocation::InvalidArgument {
                    name: "units",
                    expected: "one of 'metric', 'imperial', 'kelvin'",
                })?
            }
            Some(_) => {
                return Err(InvalidInvocation::InvalidArgument {
                    name: "units",
                    expected: "one of 'metric', 'imperial', 'kelvin'",
                })
            }
        };

        Ok(Invocation { tool, city, units })
    }

    /// Read a resource.
    pub fn read_resource(&self, uri: &str) -> McpResult<ReadResourceResult> {
        self.read_resource_at(uri, Utc::now())
    }

    /// Read a resource, stamping status snapshots with `now`.
    pub fn read_resource_at(&self, uri: &str, now: DateTime<Utc>) -> McpResult<ReadResourceResult> {
        let body = match uri {
            POPULAR_CITIES_URI => json!({ "cities": POPULAR_CITIES }),
            API_STATUS_URI => {
                let api_key = if self.api_key_configured {
                    "configured"
                } else {
                    "demo"
                };
                json!({
                    "status": "operational",
                    "apiKey": api_key,
                    "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true),
                })
            }
            other => return Err(McpError::ResourceNotFound(other.to_string())),
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContent::json(uri, &body)],
        })
    }
}

fn city_schema(description: &str) -> JsonValue {
    let units: Vec<&str> = UnitSystem::ALL.iter().map(|u| u.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            "city": {
                "type": "string",
                "description": description
            },
            "units": {
                "type": "string",
                "enum": units,
                "default": UnitSystem::default().as_str(),
                "description": "Temperature units (default: metric)"
            }
        },
        "required": ["city"]
    })
}

fn tool_catalog() -> Vec<McpTool> {
    vec![
        McpTool::new(
            ToolName::GetWeather.as_str(),
            city_schema("City name (e.g., 'London', 'New York')"),
        )
        .with_description("Get current weather information for a city"),
        McpTool::new(
            ToolName::GetForecast.as_str(),
            city_schema("City name to get the forecast for"),
        )
        .with_description("Get a 5-day weather forecast for a city"),
    ]
}

fn resource_catalog() -> Vec<Resource> {
    vec![
        Resource::new(POPULAR_CITIES_URI, "Popular Cities")
            .with_description("List of popular cities for weather queries")
            .with_mime_type("application/json"),
        Resource::new(API_STATUS_URI, "API Status")
            .with_description("Weather API configuration and status")
            .with_mime_type("application/json"),
    ]
}

fn prompt_catalog() -> Vec<Prompt> {
    vec![
        Prompt::new("weather_summary")
            .with_description("Generate a weather summary for a city")
            .with_argument(PromptArgument::new(
                "city",
                "The city to summarize the weather for",
                true,
            )),
        Prompt::new("travel_weather_advice")
            .with_description("Get weather-based travel advice for a destination")
            .with_argument(PromptArgument::new(
                "destination",
                "Travel destination city",
                true,
            ))
            .with_argument(PromptArgument::new(
                "travel_date",
                "Planned travel date (optional)",
                false,
            )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::new(false)
    }

    #[test]
    fn test_catalogs_are_stable() {
        let registry = registry();

        assert_eq!(registry.list_tools(), registry.list_tools());
        assert_eq!(registry.list_resources(), registry.list_resources());
        assert_eq!(registry.list_prompts(), registry.list_prompts());
        assert_eq!(registry.list_tools().len(), 2);
        assert_eq!(registry.list_resources().len(), 2);
        assert_eq!(registry.list_prompts().len(), 2);
    }

    #[test]
    fn test_tool_schema_requires_city() {
        let tools = registry().list_tools();
        let weather = tools.iter().find(|t| t.name == "get_weather").unwrap();

        assert_eq!(weather.input_schema["required"], json!(["city"]));
        assert_eq!(
            weather.input_schema["properties"]["units"]["enum"],
            json!(["metric", "imperial", "kelvin"])
        );
    }

    #[test]
    fn test_validate_ok() {
        let inv = registry()
            .validate_invocation("get_forecast", &json!({"city": "Tokyo", "units": "kelvin"}))
            .unwrap();

        assert_eq!(
            inv,
            Invocation {
                tool: ToolName::GetForecast,
                city: "Tokyo".to_string(),
                units: UnitSystem::Kelvin,
            }
        );
    }

    #[test]
    fn test_validate_defaults_units() {
        let inv = registry()
            .validate_invocation("get_weather", &json!({"city": "Berlin"}))
            .unwrap();
        assert_eq!(inv.units, UnitSystem::Metric);
    }

    #[test]
    fn test_validate_missing_city() {
        let err = registry()
            .validate_invocation("get_weather", &json!({}))
            .unwrap_err();
        assert_eq!(err, InvalidInvocation::MissingArgument("city"));

        let err = registry()
            .validate_invocation("get_weather", &JsonValue::Null)
            .unwrap_err();
        assert_eq!(err, InvalidInvocation::MissingArgument("city"));
    }

    #[rstest]
    #[case(json!({"city": 42}), "city")]
    #[case(json!({"city": "  "}), "city")]
    #[case(json!({"city": "Rome", "units": "celsius"}), "units")]
    #[case(json!({"city": "Rome", "units": 1}), "units")]
    fn test_validate_bad_arguments(#[case] args: JsonValue, #[case] field: &str) {
        let err = registry().validate_invocation("get_weather", &args).unwrap_err();
        assert!(
            matches!(err, InvalidInvocation::InvalidArgument { name, .. } if name == field),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn test_validate_unknown_tool_and_shape() {
        assert_eq!(
            registry()
                .validate_invocation("get_tides", &json!({"city": "Rome"}))
                .unwrap_err(),
            InvalidInvocation::UnknownTool("get_tides".to_string())
        );
        assert_eq!(
            registry()
                .validate_invocation("get_weather", &json!(["Rome"]))
                .unwrap_err(),
            InvalidInvocation::ArgumentsNotObject
        );
    }

    #[test]
    fn test_read_popular_cities() {
        let result = registry().read_resource(POPULAR_CITIES_URI).unwrap();
        let content = &result.contents[0];
        let body: JsonValue = serde_json::from_str(content.text.as_deref().unwrap()).unwrap();

        assert_eq!(content.uri, POPULAR_CITIES_URI);
        assert_eq!(body["cities"].as_array().unwrap().len(), 10);
        assert_eq!(body["cities"][0], "London");
    }

    #[test]
    fn test_read_api_status() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap();

        let result = CapabilityRegistry::new(true)
            .read_resource_at(API_STATUS_URI, now)
            .unwrap();
        let body: JsonValue =
            serde_json::from_str(result.contents[0].text.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "operational");
        assert_eq!(body["apiKey"], "configured");
        assert_eq!(body["timestamp"], "2026-10-18T12:30:00.000Z");

        let result = registry().read_resource_at(API_STATUS_URI, now).unwrap();
        let body: JsonValue =
            serde_json::from_str(result.contents[0].text.as_deref().unwrap()).unwrap();
        assert_eq!(body["apiKey"], "demo");
    }

    #[test]
    fn test_read_unknown_resource() {
        let err = registry().read_resource("weather://nowhere").unwrap_err();
        assert!(matches!(err, McpError::ResourceNotFound(uri) if uri == "weather://nowhere"));
    }
}
