//! Minimal configuration module for voyago-core
//!
//! Only exports pure data types. All loading logic is in the CLI layer.

pub mod types;

pub use types::{ModelParams, ResolvedLlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
