//! Mock currency conversion tool

use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::{Tool, ToolCall, ToolResult};
use async_trait::async_trait;
use serde_json::json;

/// Mock currency conversion without external APIs. Rates are pegged to USD.
pub struct ConvertCurrencyTool;

impl ConvertCurrencyTool {
    pub fn new() -> Self {
        Self
    }
}

/// Mock FX rate versus USD; codes are expected in uppercase
fn rate_to_usd(code: &str) -> Option<f64> {
    match code {
        "USD" => Some(1.0),
        "EUR" => Some(0.92),
        "JPY" => Some(155.0),
        "INR" => Some(83.0),
        "GBP" => Some(0.78),
        _ => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait]
impl Tool for ConvertCurrencyTool {
    fn name(&self) -> &str {
        "convert_currency"
    }

    fn description(&self) -> &str {
        "Convert currency using mock exchange rates."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "amount": {
                    "type": "number"
                },
                "from_currency": {
                    "type": "string",
                    "description": "e.g., 'USD'"
                },
                "to_currency": {
                    "type": "string",
                    "description": "e.g., 'JPY'"
                }
            },
            "required": ["amount", "from_currency", "to_currency"]
        })
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let amount: f64 = call.get_parameter("amount")?;
        let from_currency: String = call.get_parameter::<String>("from_currency")?.to_uppercase();
        let to_currency: String = call.get_parameter::<String>("to_currency")?.to_uppercase();

        let (Some(from_rate), Some(to_rate)) =
            (rate_to_usd(&from_currency), rate_to_usd(&to_currency))
        else {
            return Ok(ToolResult::error(
                call.id,
                call.name,
                format!(
                    "Unsupported currency pair {}->{}",
                    from_currency, to_currency
                ),
            ));
        };

        let converted = round2(amount / from_rate * to_rate);

        let payload = json!({
            "amount": amount,
            "from_currency": from_currency,
            "to_currency": to_currency,
            "converted_amount": converted,
            "note": "Mock rate for demo only",
        });

        Ok(ToolResult::success(call.id, call.name, payload))
    }
}

impl Default for ConvertCurrencyTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    ConvertCurrencyToolFactory,
    ConvertCurrencyTool,
    "convert_currency",
    "Convert currency using mock exchange rates."
);
