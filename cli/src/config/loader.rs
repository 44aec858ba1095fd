//! Simple CLI configuration loader for voyago
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file (highest priority)
//! 2. Current working directory: ./voyago.json or ./.voyago/config.json
//! 3. XDG config: ~/.config/voyago/config.json
//! 4. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voyago_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use voyago_core::{ModelParams, ResolvedLlmConfig};

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// API key (can be "env:VAR_NAME" for environment variable)
    pub api_key: String,
    /// Base URL (optional, uses the OpenAI default if not specified)
    pub base_url: Option<String>,
    /// Model name (optional)
    pub model: Option<String>,
    /// Model parameters (optional)
    #[serde(default)]
    pub params: ModelParams,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file path
    config_override: Option<PathBuf>,
    /// Flag overrides
    api_key_override: Option<String>,
    base_url_override: Option<String>,
    model_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            api_key_override: None,
            base_url_override: None,
            model_override: None,
        }
    }

    /// Set config file override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedLlmConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_file(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(api_key) = &self.api_key_override {
            config.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(model) = &self.model_override {
            config.model = Some(model.clone());
        }

        // Step 3: Resolve to final LLM config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 3. Environment variables only
        self.load_env_only()
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./voyago.json first
        let voyago_json = cwd.join("voyago.json");
        if voyago_json.exists() {
            return Ok(Some(self.load_file(&voyago_json).await?));
        }

        // Try ./.voyago/config.json
        let voyago_dir_config = cwd.join(".voyago").join("config.json");
        if voyago_dir_config.exists() {
            return Ok(Some(self.load_file(&voyago_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("voyago").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build a config from environment variables only
    fn load_env_only(&self) -> Result<RawConfig> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            anyhow!(
                "No configuration found. Please create a voyago.json file or set OPENAI_API_KEY"
            )
        })?;

        let base_url = std::env::var("OPENAI_BASE_URL").ok();
        let model = std::env::var("OPENAI_MODEL")
            .or_else(|_| std::env::var("VOYAGO_MODEL"))
            .ok();

        Ok(RawConfig {
            api_key,
            base_url,
            model,
            params: ModelParams::default(),
        })
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve raw config to ResolvedLlmConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ResolvedLlmConfig> {
        // Resolve API key (handle env: prefix)
        let api_key = if let Some(var_name) = config.api_key.strip_prefix("env:") {
            std::env::var(var_name)
                .with_context(|| format!("Environment variable not found: {}", var_name))?
        } else {
            config.api_key
        };

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let resolved =
            ResolvedLlmConfig::new(base_url, api_key, model).with_params(config.params);

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(api_key: &str) -> RawConfig {
        RawConfig {
            api_key: api_key.to_string(),
            base_url: None,
            model: None,
            params: ModelParams::default(),
        }
    }

    #[test]
    fn literal_api_key_resolves_with_defaults() {
        let loader = CliConfigLoader::new();
        let resolved = loader.resolve_config(raw("sk-test")).unwrap();

        assert_eq!(resolved.api_key, "sk-test");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.model, DEFAULT_MODEL);
    }

    #[test]
    fn env_indirection_fails_for_missing_variable() {
        let loader = CliConfigLoader::new();
        let result = loader.resolve_config(raw("env:VOYAGO_TEST_KEY_THAT_DOES_NOT_EXIST"));
        assert!(result.is_err());
    }

    #[test]
    fn empty_api_key_fails_validation() {
        let loader = CliConfigLoader::new();
        assert!(loader.resolve_config(raw("")).is_err());
    }
}
