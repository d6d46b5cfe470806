//! Configuration for a completion

use serde::{Deserialize, Serialize};

/// Completion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct General {
    /// The model to use
    pub model: String,

    /// Sampling temperature, provider default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate, provider default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Whether to return the usage information in stream mode
    #[serde(default)]
    pub usage: bool,
}

impl General {
    /// Create a new configuration
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            model: crate::DEFAULT_MODEL.into(),
            temperature: None,
            max_tokens: None,
            usage: false,
        }
    }
}
