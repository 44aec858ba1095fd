//! Trajectory entry structures

use crate::llm::{LlmMessage, Usage};
use crate::tools::{ToolCall, ToolResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped event in a query's lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,

    /// The recorded event
    #[serde(flatten)]
    pub entry_type: EntryType,
}

/// Recorded event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryType {
    /// A user query entered the two-phase exchange
    QueryStart { query: String },

    /// Request payload sent to the model
    LlmRequest {
        phase: usize,
        messages: Vec<LlmMessage>,
        model: String,
        tools_offered: usize,
    },

    /// Response payload received from the model
    LlmResponse {
        phase: usize,
        message: LlmMessage,
        usage: Option<Usage>,
        finish_reason: Option<String>,
    },

    /// A tool invocation requested by the model
    ToolCall { call: ToolCall },

    /// The dispatched result for a tool invocation
    ToolResult { result: ToolResult },

    /// The final natural-language answer
    QueryComplete { answer: String },
}

impl TrajectoryEntry {
    fn new(entry_type: EntryType) -> Self {
        Self {
            timestamp: Utc::now(),
            entry_type,
        }
    }

    pub fn query_start(query: String) -> Self {
        Self::new(EntryType::QueryStart { query })
    }

    pub fn llm_request(
        phase: usize,
        messages: Vec<LlmMessage>,
        model: String,
        tools_offered: usize,
    ) -> Self {
        Self::new(EntryType::LlmRequest {
            phase,
            messages,
            model,
            tools_offered,
        })
    }

    pub fn llm_response(
        phase: usize,
        message: LlmMessage,
        usage: Option<Usage>,
        finish_reason: Option<String>,
    ) -> Self {
        Self::new(EntryType::LlmResponse {
            phase,
            message,
            usage,
            finish_reason,
        })
    }

    pub fn tool_call(call: ToolCall) -> Self {
        Self::new(EntryType::ToolCall { call })
    }

    pub fn tool_result(result: ToolResult) -> Self {
        Self::new(EntryType::ToolResult { result })
    }

    pub fn query_complete(answer: String) -> Self {
        Self::new(EntryType::QueryComplete { answer })
    }
}
