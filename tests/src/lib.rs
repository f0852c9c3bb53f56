//! # Stinger Test Suite
//!
//! Unified test crate for flows that span more than one crate:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── counter_flow.rs   # event dispatch → state change → client push
//!     ├── ws_bridge.rs      # inbound frame handling and boundary policy
//!     └── http_routes.rs    # page rendering and health route
//! ```
//!
//! Single-crate behavior is tested in each crate's own `#[cfg(test)]`
//! modules; only cross-crate choreography lives here.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p stinger-tests
//! ```

#![allow(dead_code)]

pub mod integration;
