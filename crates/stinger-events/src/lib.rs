//! # stinger-events
//!
//! Event handling core: the registry mapping event keys to server-side
//! handlers, normalization of loosely-typed client payloads, and dispatch.
//!
//! ## Per-message lifecycle
//!
//! ```text
//! Received → Parsed → HandlerResolved → Executing → {Completed | Failed}
//! ```
//!
//! The transport bridge drives this: `Completed` produces exactly one
//! `event_response`, `Failed` (malformed payload or handler failure)
//! exactly one `error`. A missing handler short-circuits with a warning
//! and no outbound message — clients may legitimately fire events nothing
//! listens to yet.
//!
//! ## Event keys
//!
//! One canonical, flat scheme: `"{component_id}_{event_type}"`, built via
//! [`EventRegistry::event_key`]. Re-registering a key replaces the previous
//! handler (last writer wins) so components can re-register idempotently
//! on re-render.

pub mod dispatch;
pub mod error;
pub mod payload;
pub mod registry;

// Re-export main types
pub use dispatch::EventDispatcher;
pub use error::EventError;
pub use payload::EventPayload;
pub use registry::{EventHandler, EventRegistry};

/// Default event kind when the client omits one.
pub const DEFAULT_EVENT_KIND: &str = "change";
