//! # Payload Normalization
//!
//! Clients deliver loosely-typed JSON; handlers get one stable record. The
//! decode step maps the three input shapes explicitly — raw scalar,
//! partial object, full object — filling defaults for anything missing.
//! Construction never fails for missing fields; only type-incompatible
//! shapes (a non-string `type`, a non-object `meta`, ...) are rejected,
//! and those become [`EventError::MalformedEvent`] rather than a raw
//! parse failure.

use crate::error::EventError;
use crate::DEFAULT_EVENT_KIND;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized event payload handed to handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Event value (input text, checkbox state, ...), absent when the
    /// client sent none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Event kind, `"change"` when the client omitted it.
    #[serde(rename = "type")]
    pub kind: String,

    /// Originating component, when the client named one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    /// Keyboard key for key events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Free-form metadata, empty when omitted.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl Default for EventPayload {
    fn default() -> Self {
        Self {
            value: None,
            kind: DEFAULT_EVENT_KIND.to_string(),
            component_id: None,
            key: None,
            meta: Map::new(),
        }
    }
}

impl EventPayload {
    /// Normalize a raw JSON payload.
    ///
    /// - `null` / absent → all defaults
    /// - non-object (scalar, array) → becomes the `value` field
    /// - object → known fields extracted, defaults fill the rest
    ///
    /// # Errors
    ///
    /// `EventError::MalformedEvent` for type-incompatible known fields.
    pub fn normalize(raw: &Value) -> Result<Self, EventError> {
        match raw {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_object(map),
            other => Ok(Self {
                value: Some(other.clone()),
                ..Self::default()
            }),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Result<Self, EventError> {
        let kind = match map.get("type") {
            None | Some(Value::Null) => DEFAULT_EVENT_KIND.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(EventError::MalformedEvent(format!(
                    "'type' must be a string, got {}",
                    type_name(other)
                )))
            }
        };

        let component_id = optional_string(map, "component_id")?;
        let key = optional_string(map, "key")?;

        let meta = match map.get("meta") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(m)) => m.clone(),
            Some(other) => {
                return Err(EventError::MalformedEvent(format!(
                    "'meta' must be an object, got {}",
                    type_name(other)
                )))
            }
        };

        Ok(Self {
            value: map.get("value").filter(|v| !v.is_null()).cloned(),
            kind,
            component_id,
            key,
            meta,
        })
    }
}

fn optional_string(map: &Map<String, Value>, field: &str) -> Result<Option<String>, EventError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(EventError::MalformedEvent(format!(
            "'{}' must be a string, got {}",
            field,
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
