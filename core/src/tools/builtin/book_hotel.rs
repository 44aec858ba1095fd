//! Mock hotel booking tool

use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::{Tool, ToolCall, ToolResult};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde_json::json;

const MOCK_HOTEL_NAME: &str = "Grand Mock Hotel";
const MOCK_CONFIRMATION_NUMBER: &str = "MOCK-HOTEL-12345";

/// Mock hotel booking tool. Pretends to contact providers and returns a
/// reservation record without any external calls.
pub struct BookHotelTool;

impl BookHotelTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for BookHotelTool {
    fn name(&self) -> &str {
        "book_hotel"
    }

    fn description(&self) -> &str {
        "Book a hotel for the user in a destination city for a number of nights."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "City name, e.g., 'Tokyo'."
                },
                "nights": {
                    "type": "integer",
                    "description": "How many nights to stay."
                },
                "check_in_date": {
                    "type": "string",
                    "description": "Optional check-in date, e.g., '2025-08-20' or 'next Monday'."
                }
            },
            "required": ["destination", "nights"]
        })
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let destination: String = call.get_parameter("destination")?;
        let nights: i64 = call.get_parameter("nights")?;
        let check_in_date: Option<String> = call.get_optional_parameter("check_in_date");

        // Default check-in: 7 days from the current UTC date
        let check_in = check_in_date
            .unwrap_or_else(|| (Utc::now().date_naive() + Duration::days(7)).to_string());

        // A free-form date string ("next Monday") degrades to a descriptive
        // check-out instead of failing the booking
        let check_out = parse_calendar_date(&check_in)
            .map(|date| (date + Duration::days(nights)).to_string())
            .unwrap_or_else(|| format!("{} + {} nights", check_in, nights));

        let payload = json!({
            "status": "confirmed",
            "hotel": MOCK_HOTEL_NAME,
            "destination": destination,
            "nights": nights,
            "check_in": check_in,
            "check_out": check_out,
            "confirmation_number": MOCK_CONFIRMATION_NUMBER,
        });

        Ok(ToolResult::success(call.id, call.name, payload))
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

impl Default for BookHotelTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    BookHotelToolFactory,
    BookHotelTool,
    "book_hotel",
    "Book a hotel for the user in a destination city for a number of nights."
);
