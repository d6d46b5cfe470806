//! Prompt composition.

use anyhow::{Result, bail};
use serde_json::Value;

/// Resume text used when the document cannot be retrieved.
pub const FALLBACK: &str = "Failed to retrieve resume content";

/// Compose a prompt whose query is the resume.
pub fn inline(template: &str, query: &str) -> String {
    format!("{template}\n\nResume: {query}")
}

/// Compose a prompt from a resume and a job description.
pub fn with_resume(template: &str, resume: &str, job: &str) -> String {
    format!("{template}\n\nResume: {resume}\n\nJob Description: {job}")
}

/// Extract the resume text from a document fetch response.
///
/// The response must report `successful: true` and carry a non-empty
/// string at `data.content`.
pub fn resume_content(response: &Value) -> Result<String> {
    if response.get("successful").and_then(Value::as_bool) != Some(true) {
        bail!("document fetch was not successful");
    }
    let Some(data) = response.get("data").and_then(Value::as_object) else {
        bail!("document response has no data");
    };
    match data.get("content").and_then(Value::as_str) {
        Some(content) if !content.is_empty() => Ok(content.to_owned()),
        _ => bail!("no content found in document"),
    }
}
