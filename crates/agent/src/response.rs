//! Streamed response buffer.

use anyhow::{Context, Result};
use std::path::Path;

/// Ordered, append-only buffer of the chunks sent to the caller.
#[derive(Debug, Clone, Default)]
pub struct StreamedResponse {
    chunks: Vec<String>,
}

impl StreamedResponse {
    /// Append a chunk.
    pub fn push(&mut self, chunk: impl Into<String>) {
        self.chunks.push(chunk.into());
    }

    /// The chunks in arrival order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// The full response text.
    pub fn text(&self) -> String {
        self.chunks.concat()
    }

    /// Overwrite `path` with the full response text.
    pub async fn write(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.text())
            .await
            .with_context(|| format!("failed to write response log {}", path.display()))?;
        tracing::debug!(
            "wrote {} chunks to {}",
            self.chunks.len(),
            path.display()
        );
        Ok(())
    }
}
