//! # stinger-state
//!
//! Reactive state layer for Stinger.
//!
//! ## Role in System
//!
//! - **StateNotifier**: observable value container with subscribe/notify
//!   semantics and an equality gate (setting an equal value is a no-op).
//! - **ComponentState**: a notifier bound to a `component_id`; every change
//!   additionally publishes a `state_change` push for connected clients.
//! - **StateRegistry**: keyed lifecycle manager for notifiers, explicitly
//!   owned by the app and passed by reference (no process-global singleton,
//!   so tests get a fresh registry each).
//! - **Bindings**: declarative state→DOM rules consumed by the browser
//!   runtime.
//!
//! ## Update flow
//!
//! ```text
//! handler ──set/update──→ [StateNotifier] ──notify──→ local subscribers
//!                              │
//!                              └─(ComponentState)──→ [PushBus] ──→ clients
//! ```

pub mod binding;
pub mod component;
pub mod error;
pub mod notifier;
pub mod registry;

// Re-export main types
pub use binding::{BindingDescriptor, BindingKind, BindingSet};
pub use component::ComponentState;
pub use error::StateError;
pub use notifier::{NotifierId, StateNotifier, StateValue, SubscriberCallback, SubscriberId};
pub use registry::StateRegistry;
