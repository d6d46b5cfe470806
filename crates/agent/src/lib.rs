//! Scout search agent.
//!
//! - [`SearchAgent`]: runs the status, search, prompt and stream flow of one request.
//! - [`AgentConfig`] / [`ResumeSource`]: where the template, resume and log live.
//! - [`StreamedResponse`]: the chunk buffer persisted to the response log.

pub use {
    agent::SearchAgent,
    config::{AgentConfig, DEFAULT_DOCUMENT_ID, ResumeSource},
    response::StreamedResponse,
};

mod agent;
mod config;
pub mod prompt;
mod response;
pub mod template;

/// Event labels emitted by [`SearchAgent`].
pub mod events {
    /// Status notice sent before searching.
    pub const SEARCH: &str = "SEARCH";

    /// Search hits as JSON.
    pub const SOURCES: &str = "SOURCES";

    /// Search images as JSON.
    pub const IMAGES: &str = "IMAGES";

    /// The streamed model answer.
    pub const FINAL_RESPONSE: &str = "FINAL_RESPONSE";
}

/// Text of the [`events::SEARCH`] notice.
pub const SEARCH_NOTICE: &str = "Searching internet for results...";
