//! Tavily web search client.
//!
//! Implements [`scout::Search`] over the Tavily `/search` endpoint, asking
//! for images alongside the text hits.

use anyhow::Result;
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use scout::{Search, SearchResults};
use serde::Serialize;

/// Tavily API base URL.
pub const BASE_URL: &str = "https://api.tavily.com";

/// Number of hits requested when not configured.
pub const DEFAULT_MAX_RESULTS: u8 = 5;

/// Errors returned by the Tavily client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or decoding failure.
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("search failed with {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body.
        body: String,
    },
    /// The API key could not be used as a header value.
    #[error("invalid search api key")]
    InvalidKey,
}

/// Request body of `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'q> {
    /// Free-text query.
    pub query: &'q str,
    /// Maximum number of hits.
    pub max_results: u8,
    /// Search depth, `basic` or `advanced`.
    pub search_depth: &'static str,
    /// Whether to return image URLs.
    pub include_images: bool,
}

/// A Tavily search client.
#[derive(Clone)]
pub struct Tavily {
    client: Client,
    headers: HeaderMap,
    base_url: String,
    max_results: u8,
}

impl Tavily {
    /// Create a client for the public Tavily API.
    pub fn new(client: Client, key: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {key}")
                .parse()
                .map_err(|_| Error::InvalidKey)?,
        );
        Ok(Self {
            client,
            headers,
            base_url: BASE_URL.to_owned(),
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Override the number of hits requested.
    pub fn max_results(mut self, max: u8) -> Self {
        self.max_results = max;
        self
    }

    /// Run a query and decode the result set.
    pub async fn query(&self, query: &str) -> Result<SearchResults, Error> {
        let body = Request {
            query,
            max_results: self.max_results,
            search_depth: "basic",
            include_images: true,
        };
        tracing::debug!("searching for {query:?}");
        let response = self
            .client
            .request(Method::POST, format!("{}/search", self.base_url))
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        let results: SearchResults = response.json().await?;
        tracing::debug!(
            "search returned {} results and {} images",
            results.results.len(),
            results.images.len()
        );
        Ok(results)
    }
}

impl Search for Tavily {
    async fn search(&self, query: &str) -> Result<SearchResults> {
        self.query(query).await.map_err(Into::into)
    }
}
