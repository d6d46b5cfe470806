//! Composio tool client for fetching documents.
//!
//! Reaches Google Docs through Composio's action-execution API. The
//! execution response is returned untouched; callers check its
//! `successful` flag and `data` payload.

use anyhow::Result;
use reqwest::{
    Client, Method, StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use scout::Documents;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Composio API base URL.
pub const BASE_URL: &str = "https://backend.composio.dev";

/// App name of the Google Docs integration.
pub const GOOGLEDOCS_APP: &str = "googledocs";

/// Action fetching a Google Doc by id.
pub const GET_DOCUMENT_BY_ID: &str = "GOOGLEDOCS_GET_DOCUMENT_BY_ID";

/// Entity used when the configuration does not name one.
pub const DEFAULT_ENTITY: &str = "default";

/// Errors returned by the Composio client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or decoding failure.
    #[error("composio request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("composio {path} failed with {status}: {body}")]
    Status {
        /// Request path.
        path: String,
        /// Response status.
        status: StatusCode,
        /// Response body.
        body: String,
    },
    /// The API key could not be used as a header value.
    #[error("invalid composio api key")]
    InvalidKey,
    /// No active account is connected for the app.
    #[error("no connected {0} account")]
    NotConnected(String),
}

/// Page of `GET /api/v1/connectedAccounts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectedAccounts {
    /// Connected accounts on this page.
    #[serde(default)]
    pub items: Vec<ConnectedAccount>,
}

/// One connected account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedAccount {
    /// Account id.
    pub id: String,
    /// Integration app name.
    #[serde(default)]
    pub app_name: String,
    /// Connection status, e.g. `ACTIVE`.
    #[serde(default)]
    pub status: String,
}

/// Body of `POST /api/v2/actions/{action}/execute`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Execute<'a> {
    /// Entity on whose behalf the action runs.
    pub entity_id: &'a str,
    /// Integration app name.
    pub app_name: &'a str,
    /// Action input.
    pub input: Value,
}

/// A Composio client bound to the Google Docs app.
#[derive(Clone)]
pub struct Composio {
    client: Client,
    headers: HeaderMap,
    base_url: String,
    entity: String,
}

impl Composio {
    /// Create a client for the public Composio API.
    pub fn new(client: Client, key: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-api-key"),
            key.parse::<HeaderValue>().map_err(|_| Error::InvalidKey)?,
        );
        Ok(Self {
            client,
            headers,
            base_url: BASE_URL.to_owned(),
            entity: DEFAULT_ENTITY.to_owned(),
        })
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Override the entity actions run for.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }

    /// List the active accounts connected for `app`.
    pub async fn connected_accounts(&self, app: &str) -> Result<ConnectedAccounts, Error> {
        let path = "/api/v1/connectedAccounts";
        let response = self
            .client
            .request(Method::GET, format!("{}{path}", self.base_url))
            .headers(self.headers.clone())
            .query(&[("appNames", app), ("showActiveOnly", "true")])
            .send()
            .await?;
        let response = Self::ensure_success(path, response).await?;
        Ok(response.json().await?)
    }

    /// Execute `action` with `input` and return the raw response.
    pub async fn execute(&self, action: &str, input: Value) -> Result<Value, Error> {
        let path = format!("/api/v2/actions/{action}/execute");
        let body = Execute {
            entity_id: &self.entity,
            app_name: GOOGLEDOCS_APP,
            input,
        };
        tracing::debug!("executing composio action {action}");
        let response = self
            .client
            .request(Method::POST, format!("{}{path}", self.base_url))
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(&path, response).await?;
        Ok(response.json().await?)
    }

    async fn ensure_success(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Status {
            path: path.to_owned(),
            status,
            body,
        })
    }
}

impl Documents for Composio {
    async fn check(&self) -> Result<()> {
        let accounts = self.connected_accounts(GOOGLEDOCS_APP).await?;
        if accounts.items.is_empty() {
            return Err(Error::NotConnected(GOOGLEDOCS_APP.to_owned()).into());
        }
        tracing::debug!("{} connected {GOOGLEDOCS_APP} account(s)", accounts.items.len());
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Value> {
        Ok(self.execute(GET_DOCUMENT_BY_ID, json!({ "id": id })).await?)
    }
}
