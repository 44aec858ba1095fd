//! System prompt for the travel assistant

/// Persona and multi-tool-call policy for the first request of every query
pub const TRAVEL_AGENT_SYSTEM_PROMPT: &str = "You are a precise travel assistant. \
     If multiple intents are present, call multiple tools. \
     You can call the tools in any order you want.";

/// Build the system prompt, listing the tools available this session
pub fn build_system_prompt(tool_names: &[&str]) -> String {
    if tool_names.is_empty() {
        return TRAVEL_AGENT_SYSTEM_PROMPT.to_string();
    }

    format!(
        "{}\n\nAvailable tools: {}",
        TRAVEL_AGENT_SYSTEM_PROMPT,
        tool_names.join(", ")
    )
}
