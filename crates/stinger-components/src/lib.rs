//! # stinger-components
//!
//! Server-rendered UI components. Each component renders an HTML fragment
//! with scoped `<style>`/`<script>` tags; interactive components wire
//! their events into an [`EventRegistry`](stinger_events::EventRegistry)
//! under the canonical flat key (`"{id}_{type}"`) and emit through the
//! browser runtime (`Stinger.emit`).
//!
//! Components are plain values: construct, configure with builder-style
//! methods, and call [`Component::render`] to get the HTML.

pub mod base;
pub mod button;
pub mod container;
pub mod text;
pub mod text_input;

// Re-export main types
pub use base::{Component, ComponentBase};
pub use button::Button;
pub use container::Container;
pub use text::{Heading, Paragraph, Text, TextStyle};
pub use text_input::TextInput;
