//! Tests for the response handler and text streams.

use scout_core::{Event, ResponseHandler, testing::Recorder};
use serde_json::json;
use tokio::sync::mpsc;

#[tokio::test]
async fn events_are_stamped_with_source() {
    let recorder = Recorder::new();
    let handler = ResponseHandler::new("Search Agent", recorder.clone());
    handler.emit_text_block("SEARCH", "searching").await.unwrap();
    handler
        .emit_json("SOURCES", json!({ "results": [] }))
        .await
        .unwrap();
    handler.complete().await.unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 3);
    for event in &events {
        let source = match event {
            Event::TextBlock { source, .. }
            | Event::Json { source, .. }
            | Event::TextChunk { source, .. }
            | Event::Error { source, .. }
            | Event::Done { source, .. } => source,
        };
        assert_eq!(source, "Search Agent");
    }
    assert_eq!(recorder.names(), ["SEARCH", "SOURCES", "done"]);
    assert!(events[2].is_terminal());
}

#[tokio::test]
async fn text_stream_chunks_share_stream_id() {
    let recorder = Recorder::new();
    let handler = ResponseHandler::new("agent", recorder.clone());
    let stream = handler.create_text_stream("FINAL_RESPONSE");
    let id = stream.id();
    stream.emit_chunk("foo").await.unwrap();
    stream.emit_chunk("bar").await.unwrap();
    stream.complete().await.unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 3);
    for event in &events {
        let Event::TextChunk { stream_id, .. } = event else {
            panic!("expected text chunk, got {event:?}");
        };
        assert_eq!(*stream_id, id);
    }
    assert!(matches!(
        &events[2],
        Event::TextChunk { is_complete: true, content, .. } if content.is_empty()
    ));
    assert_eq!(recorder.chunks(), ["foo", "bar"]);
}

#[tokio::test]
async fn closed_recorder_rejects_events() {
    let recorder = Recorder::new();
    recorder.close();
    let handler = ResponseHandler::new("agent", recorder.clone());
    assert!(handler.emit_text_block("SEARCH", "x").await.is_err());
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn channel_sink_forwards_in_order() {
    let (tx, mut rx) = mpsc::channel(8);
    let handler = ResponseHandler::new("agent", tx);
    handler.emit_text_block("A", "1").await.unwrap();
    handler.emit_text_block("B", "2").await.unwrap();
    handler.complete().await.unwrap();

    let mut names = Vec::new();
    while let Some(event) = rx.recv().await {
        names.push(event.name().to_owned());
    }
    assert_eq!(names, ["A", "B", "done"]);
}

#[tokio::test]
async fn channel_sink_fails_when_receiver_dropped() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let handler = ResponseHandler::new("agent", tx);
    let err = handler.emit_text_block("A", "1").await.unwrap_err();
    assert!(err.to_string().contains("closed"));
}
