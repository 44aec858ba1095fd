//! Mock weather lookup tool

use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::{Tool, ToolCall, ToolResult};
use async_trait::async_trait;
use serde_json::json;

/// Mock weather tool. Returns a simple forecast without real API calls.
pub struct GetWeatherTool;

impl GetWeatherTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get a simple weather forecast for a city on a given date (mock data)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string"
                },
                "date": {
                    "type": "string",
                    "description": "Optional date, e.g., '2025-08-22' or 'next weekend'."
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let city: String = call.get_parameter("city")?;
        let date: Option<String> = call.get_optional_parameter("date");

        let payload = json!({
            "city": city,
            "date": date.unwrap_or_else(|| "upcoming".to_string()),
            "forecast": forecast_for(&city),
            "high_c": 26,
            "low_c": 18,
        });

        Ok(ToolResult::success(call.id, call.name, payload))
    }
}

/// Fixed city-to-forecast table; lookup is case-insensitive
fn forecast_for(city: &str) -> &'static str {
    match city.to_lowercase().as_str() {
        "london" | "seattle" => "Cloudy with light rain",
        "dubai" => "Hot and dry",
        "tokyo" => "Partly cloudy, mild",
        _ => "Sunny with light breeze",
    }
}

impl Default for GetWeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    GetWeatherToolFactory,
    GetWeatherTool,
    "get_weather",
    "Get a simple weather forecast for a city on a given date (mock data)."
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn weather(arguments: serde_json::Value) -> ToolResult {
        GetWeatherTool::new()
            .execute(ToolCall::new("get_weather", arguments))
            .await
            .expect("lookup should not fail")
    }

    #[tokio::test]
    async fn london_forecast_is_fixed() {
        let result = weather(json!({ "city": "London" })).await;
        assert_eq!(
            result.payload.get("forecast").and_then(|v| v.as_str()),
            Some("Cloudy with light rain")
        );
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let upper = weather(json!({ "city": "London" })).await;
        let lower = weather(json!({ "city": "london" })).await;
        assert_eq!(
            upper.payload.get("forecast"),
            lower.payload.get("forecast")
        );
    }

    #[tokio::test]
    async fn unknown_city_gets_generic_forecast() {
        let result = weather(json!({ "city": "Reykjavik" })).await;
        assert_eq!(
            result.payload.get("forecast").and_then(|v| v.as_str()),
            Some("Sunny with light breeze")
        );
        assert_eq!(result.payload.get("high_c"), Some(&json!(26)));
        assert_eq!(result.payload.get("low_c"), Some(&json!(18)));
    }

    #[tokio::test]
    async fn missing_date_defaults_to_upcoming() {
        let result = weather(json!({ "city": "Tokyo" })).await;
        assert_eq!(
            result.payload.get("date").and_then(|v| v.as_str()),
            Some("upcoming")
        );
    }
}
