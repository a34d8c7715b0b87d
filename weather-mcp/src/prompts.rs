//! Prompt template expansion.

use std::collections::HashMap;
use weather_mcp_protocol::{GetPromptResult, McpError, McpResult, PromptMessage};

/// Expand a prompt from the catalog.
pub fn get_prompt(name: &str, arguments: &HashMap<String, String>) -> McpResult<GetPromptResult> {
    match name {
        "weather_summary" => {
            let city = required(arguments, "city")?;
            Ok(GetPromptResult {
                description: Some(format!("Weather summary for {}", city)),
                messages: vec![PromptMessage::user(format!(
                    "Please provide a comprehensive weather summary for {city}. \
                     Use the get_weather tool to fetch the current conditions and the \
                     get_forecast tool for the coming days, then describe the temperature, \
                     humidity, wind and any notable weather patterns."
                ))],
            })
        }
        "travel_weather_advice" => {
            let destination = required(arguments, "destination")?;
            let when = optional(arguments, "travel_date")
                .map(|date| format!(" on {}", date))
                .unwrap_or_default();
            Ok(GetPromptResult {
                description: Some(format!("Travel weather advice for {}", destination)),
                messages: vec![PromptMessage::user(format!(
                    "I'm planning to travel to {destination}{when}. Please check the current \
                     weather and the forecast using the get_weather and get_forecast tools, \
                     and give me travel advice: what to pack, which activities suit the \
                     expected conditions, and any weather-related precautions."
                ))],
            })
        }
        other => Err(McpError::PromptNotFound(other.to_string())),
    }
}

fn required<'a>(arguments: &'a HashMap<String, String>, name: &str) -> McpResult<&'a str> {
    optional(arguments, name)
        .ok_or_else(|| McpError::invalid_params(format!("missing required argument '{}'", name)))
}

fn optional<'a>(arguments: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    arguments
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
