//! The OpenAI-compatible provider and its [`Model`] implementation.

use crate::{
    General, Message, Request, StreamChunk,
    sse::{DONE, SseDecoder},
};
use anyhow::{Result, anyhow};
use async_stream::try_stream;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method, Response,
    header::{self, HeaderMap, HeaderValue},
};
use scout::Model;

/// An OpenAI-compatible chat completions provider.
#[derive(Clone)]
pub struct OpenAI {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
    config: General,
}

impl OpenAI {
    /// Create a provider targeting the OpenAI API.
    pub fn api(client: Client, key: &str, config: General) -> Result<Self> {
        Self::custom(client, key, crate::endpoint::OPENAI, config)
    }

    /// Create a provider targeting the Fireworks API.
    pub fn fireworks(client: Client, key: &str, config: General) -> Result<Self> {
        Self::custom(client, key, crate::endpoint::FIREWORKS, config)
    }

    /// Create a provider targeting a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str, config: General) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/event-stream"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
            config,
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the completion configuration.
    pub fn config(&self) -> &General {
        &self.config
    }

    /// Build the streaming request body for a single user prompt.
    pub fn request(&self, prompt: &str) -> Request {
        Request::from(self.config.clone())
            .messages(vec![Message::user(prompt)])
            .stream(self.config.usage)
    }
}

impl Model for OpenAI {
    fn stream(&self, prompt: &str) -> impl Stream<Item = Result<String>> + Send {
        let body = self.request(prompt);
        if let Ok(body) = serde_json::to_string(&body) {
            tracing::trace!("request: {body}");
        }
        let request = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body);

        try_stream! {
            let response = ensure_success(request.send().await?).await?;
            let mut bytes = response.bytes_stream();
            let mut decoder = SseDecoder::default();
            let mut count = 0usize;
            let mut done = false;
            while let Some(next) = bytes.next().await {
                for data in decoder.feed(&next?) {
                    if data == DONE {
                        done = true;
                        break;
                    }
                    if let Some(content) = parse(&data)? {
                        count += 1;
                        yield content;
                    }
                }
                if done {
                    break;
                }
            }
            let tail = if done { None } else { decoder.finish() };
            if let Some(data) = tail.filter(|data| data != DONE) {
                if let Some(content) = parse(&data)? {
                    count += 1;
                    yield content;
                }
            }
            tracing::debug!("model stream closed after {count} chunks");
        }
    }
}

/// Turn a non-success response into an error carrying its body.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("model endpoint responded with status: {status}");
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(anyhow!("model request failed with {status}: {text}"))
}

/// Extract the text of one SSE payload.
///
/// Malformed or empty chunks are skipped; an in-stream error ends the
/// stream with that error.
fn parse(data: &str) -> Result<Option<String>> {
    let chunk = match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::warn!("failed to parse chunk: {e}, data: {data}");
            return Ok(None);
        }
    };
    if let Some(error) = chunk.error() {
        return Err(anyhow!("model stream failed: {error}"));
    }
    if let Some(reason) = chunk.reason() {
        tracing::debug!("finish reason: {reason:?}");
    }
    if let Some(usage) = &chunk.usage {
        tracing::debug!(
            "usage: {} prompt + {} completion = {} tokens",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }
    Ok(chunk.content().map(ToOwned::to_owned))
}
