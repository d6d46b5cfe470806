//! Response events delivered to the caller.
//!
//! Every event carries its own id and the name of the emitting agent. The
//! `content_type` tag distinguishes atomic events from chunks of a text
//! stream.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

/// Event name of the terminal error event.
pub const ERROR_EVENT: &str = "error";

/// Event name of the terminal done event.
pub const DONE_EVENT: &str = "done";

/// A single event on the response channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type")]
pub enum Event {
    /// A labeled block of text.
    #[serde(rename = "atomic.textblock")]
    TextBlock {
        /// Event id.
        id: Ulid,
        /// Emitting agent.
        source: CompactString,
        /// Event label.
        event_name: CompactString,
        /// Text content.
        content: String,
    },
    /// A labeled JSON payload.
    #[serde(rename = "atomic.json")]
    Json {
        /// Event id.
        id: Ulid,
        /// Emitting agent.
        source: CompactString,
        /// Event label.
        event_name: CompactString,
        /// JSON content.
        content: Value,
    },
    /// One chunk of a labeled text stream.
    #[serde(rename = "chunked.text")]
    TextChunk {
        /// Event id.
        id: Ulid,
        /// Emitting agent.
        source: CompactString,
        /// Event label, shared by every chunk of the stream.
        event_name: CompactString,
        /// Stream id, shared by every chunk of the stream.
        stream_id: Ulid,
        /// Set on the final, empty chunk only.
        is_complete: bool,
        /// Chunk text.
        content: String,
    },
    /// The request failed.
    #[serde(rename = "atomic.error")]
    Error {
        /// Event id.
        id: Ulid,
        /// Emitting agent.
        source: CompactString,
        /// Always [`ERROR_EVENT`].
        event_name: CompactString,
        /// Error details.
        content: ErrorContent,
    },
    /// The response is complete.
    #[serde(rename = "atomic.done")]
    Done {
        /// Event id.
        id: Ulid,
        /// Emitting agent.
        source: CompactString,
        /// Always [`DONE_EVENT`].
        event_name: CompactString,
    },
}

/// Payload of [`Event::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContent {
    /// Human-readable message.
    pub error_message: String,
    /// HTTP-style status code.
    pub error_code: u16,
}

impl Event {
    /// Build an error event.
    pub fn error(source: &str, message: impl Into<String>, code: u16) -> Self {
        Self::Error {
            id: Ulid::new(),
            source: source.into(),
            event_name: ERROR_EVENT.into(),
            content: ErrorContent {
                error_message: message.into(),
                error_code: code,
            },
        }
    }

    /// The event label.
    pub fn name(&self) -> &str {
        match self {
            Self::TextBlock { event_name, .. }
            | Self::Json { event_name, .. }
            | Self::TextChunk { event_name, .. }
            | Self::Error { event_name, .. }
            | Self::Done { event_name, .. } => event_name,
        }
    }

    /// Whether this event ends the response.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Done { .. })
    }
}
