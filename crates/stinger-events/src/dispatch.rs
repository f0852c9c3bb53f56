//! # Event Dispatch
//!
//! Resolves an inbound event key to a handler, normalizes the payload, and
//! invokes the handler with failure capture. Exception handling lives here
//! at the single dispatch call site — handlers are stored unwrapped, so
//! re-registration never accumulates wrapper layers.

use crate::error::EventError;
use crate::payload::EventPayload;
use crate::registry::EventRegistry;
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{error, warn};

/// Dispatches inbound events to registered handlers.
///
/// Cheap to clone; clones share the registry.
#[derive(Clone)]
pub struct EventDispatcher {
    registry: EventRegistry,
}

impl EventDispatcher {
    /// Create a dispatcher over a handler registry.
    #[must_use]
    pub fn new(registry: EventRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Dispatch one event: resolve, normalize, invoke.
    ///
    /// # Errors
    ///
    /// - `EventError::HandlerNotFound` — no handler for this key (also
    ///   logged as a warning; callers usually drop it without an outbound
    ///   error since clients may fire events nothing listens to yet)
    /// - `EventError::MalformedEvent` — payload had a type-incompatible shape
    /// - `EventError::HandlerExecution` — the handler returned an error or
    ///   panicked; logged with handler identity, the dispatcher remains
    ///   usable
    pub fn dispatch(&self, event_id: &str, raw_payload: &Value) -> Result<Value, EventError> {
        let Some(handler) = self.registry.get(event_id) else {
            warn!(event_id = %event_id, "No handler registered for event");
            return Err(EventError::HandlerNotFound(event_id.to_string()));
        };

        let payload = EventPayload::normalize(raw_payload)?;

        match catch_unwind(AssertUnwindSafe(|| handler(payload))) {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                error!(event_id = %event_id, error = %e, "Event handler failed");
                Err(EventError::HandlerExecution {
                    event_id: event_id.to_string(),
                    message: e.to_string(),
                })
            }
            Err(panic) => {
                let message = panic_message(&panic);
                error!(event_id = %event_id, message = %message, "Event handler panicked");
                Err(EventError::HandlerExecution {
                    event_id: event_id.to_string(),
                    message,
                })
            }
        }
    }
}

fn panic_message(panic: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
