//! Agent configuration structures

use serde::{Deserialize, Serialize};

/// Configuration for the travel agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// List of tools available to this agent
    pub tools: Vec<String>,

    /// Custom system prompt for the agent (optional)
    /// If not provided, the default travel-assistant prompt will be used
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            tools: vec![
                "book_hotel".to_string(),
                "get_weather".to_string(),
                "convert_currency".to_string(),
            ],
            system_prompt: None,
        }
    }
}

/// Builder for creating agents with resolved LLM configuration
pub struct AgentBuilder {
    llm_config: crate::config::ResolvedLlmConfig,
    agent_config: AgentConfig,
}

impl AgentBuilder {
    /// Create a new agent builder with LLM configuration
    pub fn new(llm_config: crate::config::ResolvedLlmConfig) -> Self {
        Self {
            llm_config,
            agent_config: AgentConfig::default(),
        }
    }

    /// Set agent configuration
    pub fn with_agent_config(mut self, agent_config: AgentConfig) -> Self {
        self.agent_config = agent_config;
        self
    }

    /// Set tools
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.agent_config.tools = tools;
        self
    }

    /// Set system prompt
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.agent_config.system_prompt = system_prompt;
        self
    }

    /// Build the agent
    pub fn build(self) -> crate::error::Result<super::TravelAgent> {
        super::TravelAgent::new_with_llm_config(self.agent_config, self.llm_config)
    }
}
