//! Document service contract.

use anyhow::Result;
use serde_json::Value;
use std::future::Future;

/// A remote document service reached through a tool-execution API.
///
/// Responses are returned raw; callers verify the shape themselves.
pub trait Documents: Send + Sync {
    /// Check that the document tool is usable (e.g. an account is connected).
    fn check(&self) -> impl Future<Output = Result<()>> + Send;

    /// Fetch a document by identifier.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Value>> + Send;
}

impl<D: Documents> Documents for Option<D> {
    async fn check(&self) -> Result<()> {
        match self {
            Some(documents) => documents.check().await,
            None => anyhow::bail!("no document tool configured"),
        }
    }

    async fn fetch(&self, id: &str) -> Result<Value> {
        match self {
            Some(documents) => documents.fetch(id).await,
            None => anyhow::bail!("no document tool configured"),
        }
    }
}
