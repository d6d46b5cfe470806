//! Core contracts for the Scout search agent.
//!
//! Defines the request types, the response-emitter protocol ([`Event`],
//! [`EventSink`], [`ResponseHandler`]) and the collaborator traits the
//! orchestrator is written against: [`Model`], [`Search`], [`Documents`]
//! and [`Agent`].

pub use {
    agent::Agent,
    document::Documents,
    event::{ErrorContent, Event},
    handler::{EventSink, ResponseHandler, TextStream},
    model::Model,
    query::Query,
    search::{Image, Search, SearchHit, SearchResults},
};

mod agent;
mod document;
mod event;
mod handler;
mod model;
mod query;
mod search;

#[cfg(feature = "testing")]
pub mod testing;
