//! Example demonstrating how to customize the travel assistant's system prompt
//!
//! This example shows two ways to set the persona:
//! 1. Relying on the built-in default
//! 2. Through AgentConfig

use voyago_core::agent::TRAVEL_AGENT_SYSTEM_PROMPT;
use voyago_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use voyago_core::{AgentBuilder, AgentConfig, ResolvedLlmConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Voyago Custom System Prompt Example ===\n");

    // A resolved config, as the CLI loader would produce it
    let llm_config = ResolvedLlmConfig::new(
        DEFAULT_BASE_URL.to_string(),
        "sk-example".to_string(),
        DEFAULT_MODEL.to_string(),
    );

    // Method 1: the built-in travel persona
    println!("1. Default persona:");
    let agent = AgentBuilder::new(llm_config.clone()).build()?;
    println!("✓ {}\n", TRAVEL_AGENT_SYSTEM_PROMPT);
    println!("  Tools: {:?}\n", agent.config().tools);

    // Method 2: set a custom persona through AgentConfig
    println!("2. Setting a custom persona through AgentConfig:");
    let mut agent_config = AgentConfig::default();
    agent_config.system_prompt = Some(
        "You are a budget-focused travel assistant. \
         Always quote prices and convert them to the traveler's home currency."
            .to_string(),
    );

    let agent = AgentBuilder::new(llm_config)
        .with_agent_config(agent_config)
        .build()?;

    if let Some(prompt) = &agent.config().system_prompt {
        println!("✓ Custom system prompt set: {}", prompt);
    } else {
        println!("✗ No custom system prompt found");
    }

    println!("\n=== JSON Configuration Example ===");
    let json = serde_json::to_string_pretty(agent.config())?;
    println!("{}", json);

    Ok(())
}
