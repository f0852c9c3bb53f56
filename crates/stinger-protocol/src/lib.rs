//! # Stinger Protocol - Wire Messages and Push Bus
//!
//! Defines the JSON message shapes exchanged with the browser runtime and
//! the in-process bus that fans server-side pushes out to every connected
//! client.
//!
//! ## Message flow
//!
//! ```text
//! ┌──────────────┐  component_event   ┌──────────────┐
//! │   Browser    │ ─────────────────→ │  WS Bridge   │
//! │   runtime    │                    │              │
//! │              │ ←───────────────── │              │
//! └──────────────┘  event_response /  └──────────────┘
//!        ↑          error                     │
//!        │                                    │ subscribe()
//!        │  state_change / title_update  ┌────┴─────┐
//!        └─────────────────────────────── │ PushBus  │ ←── publish()
//!                                         └──────────┘   (ComponentState,
//!                                                          TitleState)
//! ```
//!
//! Every connection holds one bus subscription; a state mutation publishes
//! once and reaches all clients.

pub mod bus;
pub mod message;

// Re-export main types
pub use bus::{PushBus, PushSubscription, SubscriptionError};
pub use message::{ClientMessage, ServerMessage};

/// Maximum push messages to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
