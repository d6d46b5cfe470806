//! Response emitter handed to an agent for one request.
//!
//! [`ResponseHandler`] stamps events with ids and the agent name and pushes
//! them into an [`EventSink`]. Completion consumes the handler, so a
//! response can only be completed once; the same holds for [`TextStream`].

use crate::{Event, event::DONE_EVENT};
use anyhow::{Result, anyhow};
use compact_str::CompactString;
use serde_json::Value;
use std::future::Future;
use tokio::sync::mpsc;
use ulid::Ulid;

/// Destination of response events.
pub trait EventSink: Send + Sync {
    /// Deliver one event, failing if the receiver is gone.
    fn send(&self, event: Event) -> impl Future<Output = Result<()>> + Send;
}

impl EventSink for mpsc::Sender<Event> {
    async fn send(&self, event: Event) -> Result<()> {
        mpsc::Sender::send(self, event)
            .await
            .map_err(|_| anyhow!("response channel closed"))
    }
}

/// Emits the events of a single response.
pub struct ResponseHandler<S> {
    source: CompactString,
    sink: S,
}

impl<S: EventSink> ResponseHandler<S> {
    /// Create a handler emitting on behalf of `source`.
    pub fn new(source: impl Into<CompactString>, sink: S) -> Self {
        Self {
            source: source.into(),
            sink,
        }
    }

    /// The emitting agent's name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Emit a labeled text block.
    pub async fn emit_text_block(&self, name: &str, content: impl Into<String>) -> Result<()> {
        tracing::debug!("emit text block {name}");
        self.sink
            .send(Event::TextBlock {
                id: Ulid::new(),
                source: self.source.clone(),
                event_name: name.into(),
                content: content.into(),
            })
            .await
    }

    /// Emit a labeled JSON payload.
    pub async fn emit_json(&self, name: &str, content: Value) -> Result<()> {
        tracing::debug!("emit json {name}");
        self.sink
            .send(Event::Json {
                id: Ulid::new(),
                source: self.source.clone(),
                event_name: name.into(),
                content,
            })
            .await
    }

    /// Open a labeled text stream.
    pub fn create_text_stream(&self, name: &str) -> TextStream<'_, S> {
        TextStream {
            handler: self,
            name: name.into(),
            stream_id: Ulid::new(),
        }
    }

    /// Signal that the response is complete.
    pub async fn complete(self) -> Result<()> {
        tracing::debug!("response complete");
        self.sink
            .send(Event::Done {
                id: Ulid::new(),
                source: self.source,
                event_name: DONE_EVENT.into(),
            })
            .await
    }
}

/// A labeled text stream opened on a [`ResponseHandler`].
pub struct TextStream<'h, S> {
    handler: &'h ResponseHandler<S>,
    name: CompactString,
    stream_id: Ulid,
}

impl<S: EventSink> TextStream<'_, S> {
    /// The id shared by every chunk of this stream.
    pub fn id(&self) -> Ulid {
        self.stream_id
    }

    /// Emit one chunk.
    pub async fn emit_chunk(&self, chunk: impl Into<String>) -> Result<()> {
        self.send(chunk.into(), false).await
    }

    /// Close the stream with an empty final chunk.
    pub async fn complete(self) -> Result<()> {
        tracing::debug!("text stream {} complete", self.name);
        self.send(String::new(), true).await
    }

    async fn send(&self, content: String, is_complete: bool) -> Result<()> {
        self.handler
            .sink
            .send(Event::TextChunk {
                id: Ulid::new(),
                source: self.handler.source.clone(),
                event_name: self.name.clone(),
                stream_id: self.stream_id,
                is_complete,
                content,
            })
            .await
    }
}
