//! OpenAI-compatible streaming model provider.
//!
//! Covers OpenAI, Fireworks and any other service exposing the OpenAI chat
//! completions API with Server-Sent Events streaming. The provider
//! implements [`scout::Model`], turning a prompt into a stream of text
//! fragments.

pub use config::General;
pub use message::{Message, Role};
pub use provider::OpenAI;
pub use request::Request;
pub use reqwest::{self, Client};
pub use sse::SseDecoder;
pub use stream::{Choice, Delta, FinishReason, StreamChunk, Usage};

mod config;
mod message;
mod provider;
mod request;
mod sse;
mod stream;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str =
    "accounts/sentientfoundation/models/dobby-unhinged-llama-3-3-70b-new";

/// OpenAI-compatible endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// Fireworks chat completions.
    pub const FIREWORKS: &str = "https://api.fireworks.ai/inference/v1/chat/completions";
}
