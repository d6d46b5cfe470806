//! Prompt template store.
//!
//! Templates are plain text files read on every request, so edits take
//! effect without a restart.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the template at `path`.
pub async fn load(path: &Path) -> Result<String> {
    let template = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read prompt template {}", path.display()))?;
    tracing::trace!("loaded template {} ({} bytes)", path.display(), template.len());
    Ok(template)
}
