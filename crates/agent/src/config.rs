//! Agent configuration.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document fetched when none is configured.
pub const DEFAULT_DOCUMENT_ID: &str = "1QrcpKg2CkBfpmJt4l-xoUzLgejpaECSE";

/// Configuration of a [`SearchAgent`](crate::SearchAgent).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent name, used as the source of every event.
    pub name: CompactString,
    /// Prompt template file, read on every request.
    pub template: PathBuf,
    /// File the final response is written to, overwritten per request.
    pub response_log: PathBuf,
    /// Query the search provider instead of using empty results.
    pub live_search: bool,
    /// Where the resume in the composed prompt comes from.
    pub resume: ResumeSource,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Search Agent".into(),
            template: "resume_update_prompt.txt".into(),
            response_log: "final_response.txt".into(),
            live_search: false,
            resume: ResumeSource::Inline,
        }
    }
}

impl AgentConfig {
    /// Set the agent name.
    pub fn name(mut self, name: impl Into<CompactString>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the template path.
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    /// Set the response log path.
    pub fn response_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.response_log = path.into();
        self
    }

    /// Enable or disable live search.
    pub fn live_search(mut self, enabled: bool) -> Self {
        self.live_search = enabled;
        self
    }

    /// Set the resume source.
    pub fn resume(mut self, source: ResumeSource) -> Self {
        self.resume = source;
        self
    }
}

/// Source of the resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ResumeSource {
    /// The query itself is the resume.
    Inline,
    /// The resume is a document; the query is the job description.
    Document {
        /// Document identifier.
        #[serde(default = "default_document_id")]
        id: String,
    },
}

impl ResumeSource {
    /// A document source with the default document id.
    pub fn document() -> Self {
        Self::Document {
            id: default_document_id(),
        }
    }
}

fn default_document_id() -> String {
    DEFAULT_DOCUMENT_ID.to_owned()
}
