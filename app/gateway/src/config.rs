//! Gateway configuration loaded from TOML.

use agent::AgentConfig;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "scout.toml";

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Environment variable holding the model API key.
pub const MODEL_API_KEY: &str = "MODEL_API_KEY";

/// Environment variable holding the search API key.
pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";

/// Environment variable holding the document tool API key.
pub const COMPOSIO_API_KEY: &str = "COMPOSIO_API_KEY";

/// Configuration that cannot be served.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required keys are unset, named by their environment variables.
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Top-level gateway configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server bind configuration.
    pub server: ServerConfig,
    /// Model provider configuration.
    pub model: ModelConfig,
    /// Search provider configuration.
    pub search: SearchConfig,
    /// Document tool configuration; when set, resumes are read from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsConfig>,
    /// Agent configuration.
    pub agent: AgentConfig,
}

/// Server configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
        }
    }
}

/// Model provider configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Model identifier.
    pub model: CompactString,
    /// Chat completions endpoint, Fireworks when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    /// Ask for token usage at the end of each stream, logged at debug level.
    pub usage: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: format!("${{{MODEL_API_KEY}}}"),
            model: llm::DEFAULT_MODEL.into(),
            base_url: None,
            temperature: None,
            max_tokens: None,
            usage: false,
        }
    }
}

/// Search provider configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Query the provider on every request instead of using empty results.
    pub enabled: bool,
    /// Number of hits requested.
    pub max_results: u8,
    /// API base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: format!("${{{TAVILY_API_KEY}}}"),
            enabled: false,
            max_results: search::DEFAULT_MAX_RESULTS,
            base_url: None,
        }
    }
}

/// Document tool configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Document holding the resume.
    pub document_id: String,
    /// Entity the document action runs for.
    pub entity: String,
    /// API base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            api_key: format!("${{{COMPOSIO_API_KEY}}}"),
            document_id: agent::DEFAULT_DOCUMENT_ID.to_owned(),
            entity: docs::DEFAULT_ENTITY.to_owned(),
            base_url: None,
        }
    }
}

impl Config {
    /// Parse a TOML string into a `Config`, expanding environment
    /// variables in the text and in defaulted keys.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        let expanded = crate::utils::expand_env_vars(toml_str);
        let mut config: Self = toml::from_str(&expanded)?;
        config.expand_keys();
        Ok(config)
    }

    /// Configuration built from defaults and the environment alone.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_toml("")
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check every required key, reporting all missing ones together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.model.api_key.trim().is_empty() {
            missing.push(MODEL_API_KEY);
        }
        if self.search.api_key.trim().is_empty() {
            missing.push(TAVILY_API_KEY);
        }
        if let Some(documents) = &self.documents
            && documents.api_key.trim().is_empty()
        {
            missing.push(COMPOSIO_API_KEY);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Expand keys still holding their `${NAME}` default; explicit values
    /// were already expanded with the text.
    fn expand_keys(&mut self) {
        expand_default(&mut self.model.api_key, MODEL_API_KEY);
        expand_default(&mut self.search.api_key, TAVILY_API_KEY);
        if let Some(documents) = &mut self.documents {
            expand_default(&mut documents.api_key, COMPOSIO_API_KEY);
        }
    }
}

fn expand_default(value: &mut String, name: &str) {
    if *value == format!("${{{name}}}") {
        *value = std::env::var(name).unwrap_or_default();
    }
}
