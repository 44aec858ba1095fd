//! Query execution command

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use voyago_core::{AgentBuilder, TrajectoryRecorder};

use crate::config::CliConfigLoader;

/// Example travel requests, used when no query is given on the command line
pub const DEMO_QUERIES: &[&str] = &[
    "I'm visiting Tokyo for 3 nights starting 2025-08-20. Book me a hotel and tell me what the weather will be like.",
    "What's the weather in London next weekend?",
    "Convert 500 USD to JPY.",
    "Book 2 nights in Dubai and convert 300 EUR to USD so I know my budget.",
];

/// Run one or more travel requests through the assistant
pub async fn run_command(
    queries: Vec<String>,
    config_loader: CliConfigLoader,
    trajectory_file: Option<PathBuf>,
) -> Result<()> {
    // Load LLM configuration
    let llm_config = config_loader.load().await?;
    info!("using model: {}", llm_config.model);

    let mut agent = AgentBuilder::new(llm_config).build()?;

    if let Some(trajectory_file) = &trajectory_file {
        info!("trajectory file: {}", trajectory_file.display());
        agent.set_trajectory_recorder(TrajectoryRecorder::with_file(trajectory_file));
    }

    println!("✨ Voyago travel assistant");

    for (idx, query) in queries.iter().enumerate() {
        println!("\n=== Request {} ===\n> {}", idx + 1, query);

        let answer = agent.handle_query(query).await?;

        println!("\nAssistant:\n{}", answer);
    }

    Ok(())
}
