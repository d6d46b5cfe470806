//! In-memory collaborators for tests.
//!
//! Enabled with the `testing` feature.

use crate::{Documents, Event, EventSink, Model, Search, SearchResults};
use anyhow::{Result, anyhow, bail};
use futures_core::Stream;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// An [`EventSink`] that records every event it receives.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
    closed: Arc<AtomicBool>,
}

impl Recorder {
    /// Create an open recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent event, as a disconnected client would.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Contents of the non-final chunks, in arrival order.
    pub fn chunks(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::TextChunk {
                    is_complete: false,
                    content,
                    ..
                } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    /// Event labels, in arrival order.
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|event| event.name().to_owned())
            .collect()
    }
}

impl EventSink for Recorder {
    async fn send(&self, event: Event) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            bail!("recorder closed");
        }
        self.events.lock().push(event);
        Ok(())
    }
}

/// A [`Model`] replaying a fixed list of chunks.
#[derive(Clone, Default)]
pub struct ScriptedModel {
    chunks: Vec<String>,
    error: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    /// Replay `chunks` and finish.
    pub fn new<I, T>(chunks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Fail with `message` after the scripted chunks.
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl Model for ScriptedModel {
    fn stream(&self, prompt: &str) -> impl Stream<Item = Result<String>> + Send {
        self.prompts.lock().push(prompt.to_owned());
        let chunks = self.chunks.clone();
        let error = self.error.clone();
        async_stream::stream! {
            for chunk in chunks {
                yield Ok(chunk);
            }
            if let Some(message) = error {
                yield Err(anyhow!(message));
            }
        }
    }
}

/// A [`Search`] returning a fixed result set.
#[derive(Clone, Default)]
pub struct StaticSearch {
    results: SearchResults,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StaticSearch {
    /// Always answer with `results`.
    pub fn new(results: SearchResults) -> Self {
        Self {
            results,
            queries: Arc::default(),
        }
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl Search for StaticSearch {
    async fn search(&self, query: &str) -> Result<SearchResults> {
        self.queries.lock().push(query.to_owned());
        Ok(self.results.clone())
    }
}

/// A [`Documents`] service answering every fetch with the same response.
#[derive(Clone)]
pub struct StaticDocuments {
    response: std::result::Result<Value, String>,
    connected: bool,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl StaticDocuments {
    /// Answer every fetch with `response`.
    pub fn new(response: Value) -> Self {
        Self {
            response: Ok(response),
            connected: true,
            fetched: Arc::default(),
        }
    }

    /// Fail every fetch with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            connected: true,
            fetched: Arc::default(),
        }
    }

    /// Report the document tool as not connected.
    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    /// Document ids fetched so far.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().clone()
    }
}

impl Documents for StaticDocuments {
    async fn check(&self) -> Result<()> {
        if !self.connected {
            bail!("no connected account for the document tool");
        }
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Value> {
        self.fetched.lock().push(id.to_owned());
        self.response.clone().map_err(|e| anyhow!(e))
    }
}
