//! Web search contract.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Page URL.
    pub url: String,

    /// Extracted snippet.
    #[serde(default)]
    pub content: String,

    /// Relevance score reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// An image reference returned alongside the hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Image {
    /// A bare image URL.
    Url(String),
    /// An image URL with a generated description.
    Described {
        /// Image URL.
        url: String,
        /// Image description.
        #[serde(default)]
        description: String,
    },
}

/// The result set of one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Ordered search hits.
    #[serde(default)]
    pub results: Vec<SearchHit>,

    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl SearchResults {
    /// The result set used while live search is switched off.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.images.is_empty()
    }
}

/// A web search provider.
pub trait Search: Send + Sync {
    /// Run a free-text query.
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResults>> + Send;
}
