//! Base tool traits and structures

use crate::error::{Result, ToolError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Trait for all tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool
    fn name(&self) -> &str;

    /// Get the description of the tool
    fn description(&self) -> &str;

    /// Get the JSON schema for the tool's parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given parameters
    async fn execute(&self, call: ToolCall) -> Result<ToolResult>;
}

/// A call to a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Correlation id for this tool call
    pub id: String,

    /// Name of the tool to call
    pub name: String,

    /// Parsed arguments to pass to the tool
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call with a freshly minted id
    pub fn new<S: Into<String>>(name: S, arguments: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from the model's raw invocation request.
    ///
    /// Malformed or non-object argument payloads degrade to an empty
    /// argument set instead of failing the call.
    pub fn from_request<S: Into<String>>(id: S, name: S, raw_arguments: &str) -> Self {
        let arguments = match serde_json::from_str::<Value>(raw_arguments) {
            Ok(value @ Value::Object(_)) => value,
            _ => json!({}),
        };

        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Get an argument value by key
    pub fn get_parameter<T>(&self, key: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let value = self
            .arguments
            .get(key)
            .ok_or_else(|| ToolError::InvalidParameters {
                message: format!("Missing parameter: {}", key),
            })?;

        serde_json::from_value(value.clone()).map_err(|_| {
            ToolError::InvalidParameters {
                message: format!("Invalid parameter type for: {}", key),
            }
            .into()
        })
    }

    /// Get an optional argument value by key
    pub fn get_optional_parameter<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.get_parameter(key).ok()
    }
}

/// Result of a tool execution, tied to the originating call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this is a result for
    pub tool_call_id: String,

    /// Name of the tool that produced this result
    pub tool_name: String,

    /// Whether the execution was successful
    pub success: bool,

    /// Structured result payload
    pub payload: Value,
}

impl ToolResult {
    /// Create a successful result
    pub fn success<S: Into<String>>(tool_call_id: S, tool_name: S, payload: Value) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            success: true,
            payload,
        }
    }

    /// Create an error result with a descriptive payload
    pub fn error<S: Into<String>>(tool_call_id: S, tool_name: S, message: S) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            success: false,
            payload: json!({ "error": message.into() }),
        }
    }

    /// Serialize the payload for a tool-role conversation message
    pub fn render_payload(&self) -> String {
        self.payload.to_string()
    }
}

/// Tool executor that dispatches calls to registered tools
pub struct ToolExecutor {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, keeping registration order
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// List all available tools, in registration order
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Execute a tool call.
    ///
    /// Never fails: an unknown tool name or a failure inside the tool
    /// implementation becomes an error payload on the result, preserving the
    /// original correlation id and tool name.
    pub async fn execute(&self, call: ToolCall) -> ToolResult {
        let Some(tool) = self.get_tool(&call.name) else {
            return ToolResult::error(
                call.id.clone(),
                call.name.clone(),
                format!("Unknown tool: {}", call.name),
            );
        };

        let call_id = call.id.clone();
        let tool_name = call.name.clone();
        match tool.execute(call).await {
            Ok(result) => result,
            Err(e) => ToolResult::error(call_id, tool_name, e.to_string()),
        }
    }

    /// Get tool definitions for LLM function calling, in registration order
    pub fn get_tool_definitions(&self) -> Vec<crate::llm::ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| crate::llm::ToolDefinition {
                tool_type: "function".to_string(),
                function: crate::llm::FunctionDefinition {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    parameters: tool.parameters_schema(),
                },
            })
            .collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}
