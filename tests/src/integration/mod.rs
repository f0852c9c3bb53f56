//! Cross-crate integration flows.

pub mod counter_flow;
pub mod http_routes;
pub mod ws_bridge;
