//! CLI command implementations

pub mod run;
pub mod tools;

pub use run::{run_command, DEMO_QUERIES};
pub use tools::tools_command;
