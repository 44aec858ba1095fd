//! Tools listing command

use anyhow::Result;
use tracing::info;
use voyago_core::tools::ToolRegistry;

/// Show available tools
pub async fn tools_command() -> Result<()> {
    info!("Listing available tools");

    println!("🛠️  Available Tools\n");

    let registry = ToolRegistry::default();

    for name in registry.list_tools() {
        if let Some((tool_name, description)) = registry.get_tool_info(name) {
            println!("📦 {}", tool_name);
            // Show first line of description only for brevity
            let first_line = description.lines().next().unwrap_or(description);
            println!("   {}\n", first_line);
        }
    }

    println!("💡 The assistant picks from these tools automatically while answering.");

    Ok(())
}
