//! # Wire Messages
//!
//! JSON text frames tagged with an `event` field. Payload field names are
//! part of the published browser-runtime contract and must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages sent from the browser runtime to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A component-originated event (click, change, keydown, ...).
    ComponentEvent {
        /// Flat event key, `"{component_id}_{event_type}"` by convention.
        event_id: String,
        /// Loosely-typed payload; the event layer normalizes it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
}

impl ClientMessage {
    /// Build a `component_event` frame.
    pub fn component_event(event_id: impl Into<String>, data: Option<Value>) -> Self {
        Self::ComponentEvent {
            event_id: event_id.into(),
            data,
        }
    }
}

/// Messages sent from the server to browser runtimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection acknowledgement, sent once after the upgrade.
    ConnectionResponse {
        /// Status string, `"connected"` on success.
        status: String,
    },

    /// Result of a dispatched component event, sent to the originating
    /// connection only.
    EventResponse {
        /// The event key that was dispatched.
        event_id: String,
        /// Handler return value (`null` for handlers that return nothing).
        response: Value,
    },

    /// A component state changed; broadcast to all connections.
    StateChange {
        /// Routing key the client runtime uses to find bound elements.
        component_id: String,
        /// The new state value.
        state: Value,
    },

    /// Application-level failure (malformed frame, handler error).
    /// The connection stays open.
    Error {
        /// Human-readable description.
        message: String,
    },

    /// Document title changed; broadcast to all connections.
    TitleUpdate {
        /// Page-specific title, if one is set.
        page_title: Option<String>,
        /// Application base title.
        base_title: String,
        /// Separator between page and base title.
        separator: String,
    },
}

impl ServerMessage {
    /// Connection acknowledgement with the standard status string.
    pub fn connected() -> Self {
        Self::ConnectionResponse {
            status: "connected".to_string(),
        }
    }

    /// Build a `state_change` push.
    pub fn state_change(component_id: impl Into<String>, state: Value) -> Self {
        Self::StateChange {
            component_id: component_id.into(),
            state,
        }
    }

    /// Build an `error` frame.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Serialize to a JSON text frame.
    ///
    /// Serialization of these shapes cannot fail; a `String` is returned
    /// directly so callers never handle an impossible error.
    #[must_use]
    pub fn to_frame(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            // Unreachable for these variants, but never panic in the
            // outbound path.
            tracing::error!(error = %e, "Failed to serialize server message");
            r#"{"event":"error","message":"internal serialization failure"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_event_field_names() {
        let msg = ClientMessage::component_event("counter-btn_click", Some(json!({"type": "click"})));
        let v: Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["event"], "component_event");
        assert_eq!(v["event_id"], "counter-btn_click");
        assert_eq!(v["data"]["type"], "click");
    }

    #[test]
    fn test_component_event_data_omitted_when_absent() {
        let msg = ClientMessage::component_event("btn_click", None);
        let text = serde_json::to_string(&msg).unwrap();
        assert!(!text.contains("data"));
    }

    #[test]
    fn test_event_response_field_names() {
        let msg = ServerMessage::EventResponse {
            event_id: "btn_click".into(),
            response: json!(3),
        };
        let v: Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["event"], "event_response");
        assert_eq!(v["event_id"], "btn_click");
        assert_eq!(v["response"], 3);
    }

    #[test]
    fn test_state_change_field_names() {
        let msg = ServerMessage::state_change("counter", json!(42));
        let v: Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["event"], "state_change");
        assert_eq!(v["component_id"], "counter");
        assert_eq!(v["state"], 42);
    }

    #[test]
    fn test_error_field_names() {
        let v: Value = serde_json::to_value(ServerMessage::error("bad frame")).unwrap();
        assert_eq!(v["event"], "error");
        assert_eq!(v["message"], "bad frame");
    }

    #[test]
    fn test_connection_response() {
        let v: Value = serde_json::to_value(ServerMessage::connected()).unwrap();
        assert_eq!(v["event"], "connection_response");
        assert_eq!(v["status"], "connected");
    }

    #[test]
    fn test_title_update_round_trip() {
        let msg = ServerMessage::TitleUpdate {
            page_title: Some("Counter".into()),
            base_title: "Stinger".into(),
            separator: " | ".into(),
        };
        let text = msg.to_frame();
        let back: ServerMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_inbound_parse_from_client_json() {
        let text = r#"{"event":"component_event","event_id":"inc_click","data":{"type":"click","value":5}}"#;
        let msg: ClientMessage = serde_json::from_str(text).unwrap();
        let ClientMessage::ComponentEvent { event_id, data } = msg;
        assert_eq!(event_id, "inc_click");
        assert_eq!(data.unwrap()["value"], 5);
    }
}
