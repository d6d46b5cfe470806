//! The request payload handed to an agent.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A single user query.
///
/// The prompt is carried as-is; empty prompts are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Query identifier, generated when the caller omits it.
    #[serde(default = "Ulid::new")]
    pub id: Ulid,

    /// The prompt text.
    #[serde(default)]
    pub prompt: String,
}

impl Query {
    /// Create a query with a fresh identifier.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            prompt: prompt.into(),
        }
    }
}
