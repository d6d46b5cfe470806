//! The agent contract served by the gateway.

use crate::{EventSink, Query, ResponseHandler};
use anyhow::Result;
use std::future::Future;

/// An agent handling one request/response cycle per call.
///
/// Implementations emit their output through `handler` and finish by
/// calling [`ResponseHandler::complete`]. An `Err` is reported by the host.
pub trait Agent: Send + Sync {
    /// The agent's display name, used as the event source.
    fn name(&self) -> &str;

    /// Answer `query`, emitting events through `handler`.
    fn assist<S: EventSink>(
        &self,
        query: Query,
        handler: ResponseHandler<S>,
    ) -> impl Future<Output = Result<()>> + Send;
}
