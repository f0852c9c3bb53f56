//! # Event Registry
//!
//! Process-wide mapping from flat event keys to handler functions. Like
//! the state registry, it is an explicitly owned object passed by `Arc`,
//! never a module-level singleton.

use crate::payload::EventPayload;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// A registered event handler.
///
/// Receives the normalized payload and returns a serializable result
/// (`Value::Null` for handlers with nothing to say). Failures are wrapped
/// into `EventError::HandlerExecution` at the dispatch site, so handlers
/// are free to use `?` internally.
pub type EventHandler = Arc<dyn Fn(EventPayload) -> anyhow::Result<Value> + Send + Sync>;

/// Registry of event handlers, keyed by flat event key.
#[derive(Default, Clone)]
pub struct EventRegistry {
    handlers: Arc<DashMap<String, EventHandler>>,
}

impl EventRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the canonical flat event key for a component and event type,
    /// e.g. `event_key("increment-btn", "click")` → `"increment-btn_click"`.
    #[must_use]
    pub fn event_key(component_id: &str, event_type: &str) -> String {
        format!("{}_{}", component_id, event_type)
    }

    /// Register a handler under an event key.
    ///
    /// Re-registering an existing key replaces the previous handler: this
    /// is the deliberate last-writer-wins policy, because components
    /// re-register their handlers idempotently when re-rendered.
    pub fn register(&self, event_id: impl Into<String>, handler: EventHandler) {
        let event_id = event_id.into();
        if self.handlers.insert(event_id.clone(), handler).is_some() {
            debug!(event_id = %event_id, "Event handler replaced");
        } else {
            debug!(event_id = %event_id, "Event handler registered");
        }
    }

    /// Register a plain closure as handler.
    pub fn register_fn<F>(&self, event_id: impl Into<String>, handler: F)
    where
        F: Fn(EventPayload) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.register(event_id, Arc::new(handler));
    }

    /// Look up a handler by event key.
    #[must_use]
    pub fn get(&self, event_id: &str) -> Option<EventHandler> {
        self.handlers.get(event_id).map(|h| Arc::clone(h.value()))
    }

    /// Remove a handler. Returns whether one was registered.
    pub fn remove(&self, event_id: &str) -> bool {
        self.handlers.remove(event_id).is_some()
    }

    /// Whether a handler is registered for this key.
    #[must_use]
    pub fn contains(&self, event_id: &str) -> bool {
        self.handlers.contains_key(event_id)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
