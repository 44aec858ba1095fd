//! Tool system and built-in travel tools

pub mod base;
pub mod builtin;
pub mod registry;

pub use base::{Tool, ToolCall, ToolExecutor, ToolResult};
pub use registry::{ToolFactory, ToolRegistry};
