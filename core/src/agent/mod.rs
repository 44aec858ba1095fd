//! Conversation orchestration for the travel assistant

pub mod config;
pub mod core;
pub mod prompt;

pub use config::{AgentBuilder, AgentConfig};
pub use core::TravelAgent;
pub use prompt::{build_system_prompt, TRAVEL_AGENT_SYSTEM_PROMPT};
