//! Event-layer error types and the boundary policy for each.

use thiserror::Error;

/// Errors from payload normalization and dispatch.
///
/// Boundary policy (applied by the transport bridge):
/// - `MalformedEvent` → one outbound `error` message, connection stays open
/// - `HandlerNotFound` → warning log only, no outbound message
/// - `HandlerExecution` → one outbound `error` message, original failure
///   never re-raised past the dispatch call site
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The inbound payload had a type-incompatible shape.
    #[error("malformed event payload: {0}")]
    MalformedEvent(String),

    /// No handler is registered for this event key.
    #[error("no handler registered for event '{0}'")]
    HandlerNotFound(String),

    /// The handler returned an error or panicked.
    #[error("handler for event '{event_id}' failed: {message}")]
    HandlerExecution {
        /// The event key whose handler failed.
        event_id: String,
        /// Rendered failure message.
        message: String,
    },
}
