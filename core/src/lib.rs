//! # voyago-core
//!
//! Core library for Voyago - a tool-calling AI travel assistant.
//!
//! This library provides the building blocks for a two-phase, tool-augmented
//! chat exchange: an LLM client abstraction with an OpenAI-compatible
//! provider, a registry of travel tools the model may invoke, and the
//! conversation orchestrator that ties them together.

// Core modules
pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod tools;
pub mod trajectory;

// Re-export commonly used types
pub use agent::{AgentBuilder, AgentConfig, TravelAgent};
pub use config::{ModelParams, ResolvedLlmConfig};
pub use trajectory::TrajectoryRecorder;

/// Current version of the voyago-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
