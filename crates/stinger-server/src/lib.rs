//! # Stinger Server
//!
//! HTTP and WebSocket front-end for a Stinger application.
//!
//! A single axum server exposes three routes:
//! - `GET /` renders the application page (server-rendered component HTML
//!   plus the embedded client runtime)
//! - `GET /ws` upgrades to the WebSocket bridge carrying component events
//!   inbound and state/title pushes outbound
//! - `GET /health` liveness probe
//!
//! ```text
//!   browser ── GET / ──────────► page (HTML + runtime JS)
//!   browser ── GET /ws ────────► WsHandler
//!                                  │ component_event ─► EventDispatcher
//!                                  │ ◄─ event_response (this connection)
//!                                  └ ◄─ state_change / title_update (PushBus)
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod router;
pub mod service;
pub mod title;
pub mod ws;

pub use config::{ServerConfig, WebSocketConfig};
pub use error::ServerError;
pub use page::Page;
pub use router::{build_router, AppContext};
pub use service::App;
pub use title::TitleState;
