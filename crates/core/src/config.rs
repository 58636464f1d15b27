//! Configuration management for paperchat.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config files (paperchat.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Credentials are resolved here and passed into clients as explicit values;
//! nothing in the application reads API keys from ambient global state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default environment variable holding the Hugging Face Inference key.
const DEFAULT_API_KEY_ENV: &str = "HUGGINGFACE_INFERENCE_KEY";

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider (e.g., "huggingface", "openai-compatible")
    pub provider: String,

    /// Default model identifier
    pub model: String,

    /// API key for the LLM provider
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// LLM provider configurations
    pub llm: Option<LlmConfig>,

    /// Retrieval pipeline settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// LLM configuration from paperchat.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    pub providers: HashMap<String, ProviderConfig>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    HuggingFace {
        #[serde(rename = "apiKeyEnv")]
        api_key_env: String,
        model: String,
        endpoint: Option<String>,
    },
    OpenAiCompatible {
        endpoint: String,
        model: String,
        #[serde(rename = "apiKeyEnv")]
        api_key_env: Option<String>,
    },
}

/// Settings for the indexing and ranking pipeline.
///
/// Defaults are sized for arXiv paper PDFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Passage size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive passages in characters
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Number of passages supplied to the answerer
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    150
}

fn default_top_n() -> usize {
    4
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            top_n: default_top_n(),
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmConfig>,
    retrieval: Option<RetrievalConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "huggingface".to_string(),
            model: "meta-llama/Llama-3.3-70B-Instruct".to_string(),
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
            llm: None,
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `PAPERCHAT_CONFIG`: Path to config file
    /// - `PAPERCHAT_PROVIDER`: LLM provider
    /// - `PAPERCHAT_MODEL`: Model identifier
    /// - `PAPERCHAT_API_KEY`: API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("PAPERCHAT_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("paperchat.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("PAPERCHAT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("PAPERCHAT_MODEL") {
            config.model = model;
        }

        config.api_key = std::env::var("PAPERCHAT_API_KEY").ok();
        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(retrieval) = config_file.retrieval {
            result.retrieval = retrieval;
        }

        if let Some(llm) = config_file.llm {
            // Set active provider from YAML
            result.provider = llm.active_provider.clone();

            // Set model from active provider config
            if let Some(provider_config) = llm.providers.get(&llm.active_provider) {
                result.model = match provider_config {
                    ProviderConfig::HuggingFace { model, .. } => model.clone(),
                    ProviderConfig::OpenAiCompatible { model, .. } => model.clone(),
                };
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the active provider configuration.
    pub fn get_provider_config(&self, provider: &str) -> Option<ProviderConfig> {
        self.llm
            .as_ref()
            .and_then(|llm| llm.providers.get(provider).cloned())
    }

    /// Get the endpoint for the active provider, if configured.
    pub fn resolve_endpoint(&self, provider: &str) -> Option<String> {
        match self.get_provider_config(provider)? {
            ProviderConfig::HuggingFace { endpoint, .. } => endpoint,
            ProviderConfig::OpenAiCompatible { endpoint, .. } => Some(endpoint),
        }
    }

    /// Resolve the API key for a provider.
    ///
    /// Precedence: explicit `PAPERCHAT_API_KEY`, then the provider's
    /// `apiKeyEnv` variable, then `HUGGINGFACE_INFERENCE_KEY`.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        let env_var = match self.get_provider_config(provider) {
            Some(ProviderConfig::HuggingFace { api_key_env, .. }) => Some(api_key_env),
            Some(ProviderConfig::OpenAiCompatible { api_key_env, .. }) => api_key_env,
            None => None,
        };

        if let Some(env_var) = env_var {
            if let Ok(key) = std::env::var(&env_var) {
                return Some(key);
            }
        }

        std::env::var(DEFAULT_API_KEY_ENV).ok()
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["huggingface", "openai-compatible"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.retrieval.overlap >= self.retrieval.chunk_size {
            return Err(AppError::Config(format!(
                "Retrieval overlap ({}) must be smaller than chunk size ({})",
                self.retrieval.overlap, self.retrieval.chunk_size
            )));
        }

        if self.retrieval.top_n == 0 {
            return Err(AppError::Config(
                "Retrieval top_n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
