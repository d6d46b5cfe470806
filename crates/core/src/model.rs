//! Language model contract.

use anyhow::Result;
use futures_core::Stream;

/// A streaming text model.
///
/// The returned stream is ordered, finite and single-pass. Dropping it
/// cancels the underlying request.
pub trait Model: Send + Sync {
    /// Stream the completion of `prompt` as text fragments.
    fn stream(&self, prompt: &str) -> impl Stream<Item = Result<String>> + Send;
}
