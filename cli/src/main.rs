//! # voyago CLI
//!
//! Command-line interface for Voyago - a tool-calling AI travel assistant.
//!
//! ## Usage
//!
//! - `voyago` - Run the built-in demo travel requests
//! - `voyago "travel request"` - Handle a single request
//! - `voyago tools` - Show available tools

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{run_command, tools_command, DEMO_QUERIES};
use config::CliConfigLoader;

/// voyago - a tool-calling AI travel assistant
#[derive(Parser)]
#[command(name = "voyago")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tool-calling AI travel assistant written in Rust")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key override
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Model name override
    #[arg(long)]
    model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output trajectory file
    #[arg(long)]
    trajectory_file: Option<PathBuf>,

    /// The travel request to handle (if omitted, runs the built-in demo requests)
    query: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show available tools
    Tools,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(api_key) = &cli.api_key {
        loader = loader.with_api_key_override(api_key.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config_loader = build_config_loader(&cli);

    match (cli.query, cli.command) {
        // If a query is provided, handle just that one
        (Some(query), None) => {
            run_command(vec![query], config_loader, cli.trajectory_file).await
        }
        // If a query is provided with a subcommand, that's an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a query and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Tools)) => tools_command().await,
        // Default to the built-in demo requests
        (None, None) => {
            let queries = DEMO_QUERIES.iter().map(|q| q.to_string()).collect();
            run_command(queries, config_loader, cli.trajectory_file).await
        }
    }
}
