//! HTTP routes: `POST /assist` streams agent events as server-sent events.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use scout::{Agent, Event, Query, ResponseHandler};
use serde_json::Value;
use std::{convert::Infallible, sync::Arc};
use tokio::sync::mpsc;

/// Events buffered between the agent task and the response body.
pub const EVENT_BUFFER: usize = 64;

/// Error code reported in the terminal error event.
pub const INTERNAL_ERROR: u16 = 500;

/// Read the body of `POST /assist`, either `{ "query": { "id"?, "prompt" } }`
/// or a bare `{ "id"?, "prompt" }`.
///
/// A body carrying a `query` key is always read as the wrapped form, so a
/// malformed inner query is an error rather than a different request.
pub fn parse_query(body: Value) -> Result<Query, serde_json::Error> {
    match body {
        Value::Object(mut object) if object.contains_key("query") => {
            serde_json::from_value(object.remove("query").unwrap_or_default())
        }
        body => serde_json::from_value(body),
    }
}

/// Build the router serving `agent`.
pub fn router<A: Agent + 'static>(agent: Arc<A>) -> Router {
    Router::new()
        .route("/assist", post(assist::<A>))
        .route("/health", get(health))
        .with_state(agent)
}

async fn health() -> &'static str {
    "ok"
}

async fn assist<A: Agent + 'static>(
    State(agent): State<Arc<A>>,
    Json(body): Json<Value>,
) -> Response {
    let query = match parse_query(body) {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!("rejected assist request: {e}");
            return (StatusCode::UNPROCESSABLE_ENTITY, format!("invalid query: {e}"))
                .into_response();
        }
    };
    tracing::info!("assist request {}", query.id);
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    tokio::spawn(run(agent, query, tx));

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(frames(rx)),
    )
        .into_response()
}

/// Run one request, reporting a failure as a terminal error event.
async fn run<A: Agent>(agent: Arc<A>, query: Query, tx: mpsc::Sender<Event>) {
    let id = query.id;
    let handler = ResponseHandler::new(agent.name(), tx.clone());
    if let Err(e) = agent.assist(query, handler).await {
        tracing::error!("assist {id} failed: {e:#}");
        let event = Event::error(agent.name(), format!("{e:#}"), INTERNAL_ERROR);
        if tx.send(event).await.is_err() {
            tracing::debug!("client gone before error event for {id}");
        }
    }
}

/// Frame each event as `data: {json}\n\n` until the agent side closes.
fn frames(
    mut rx: mpsc::Receiver<Event>,
) -> impl futures_core::Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    async_stream::stream! {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => yield Ok(Bytes::from(format!("data: {json}\n\n"))),
                Err(e) => tracing::warn!("failed to serialize event {}: {e}", event.name()),
            }
        }
    }
}
