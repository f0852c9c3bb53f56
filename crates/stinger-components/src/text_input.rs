//! # Text Input
//!
//! A single-line text input. With a change handler attached it registers
//! under the `"{id}_change"` event key; the browser emits the current
//! input value on change.

use crate::base::{Component, ComponentBase};
use serde_json::Value;
use stinger_events::{EventPayload, EventRegistry};

/// A customizable text input component.
#[derive(Clone)]
pub struct TextInput {
    base: ComponentBase,
    value: String,
    placeholder: String,
    disabled: bool,
    change_key: Option<String>,
}

impl TextInput {
    /// Create a text input with the default look.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let mut base = ComponentBase::new(id);
        base.add_class("stinger-text-input");
        for (property, value) in [
            ("width", "200px"),
            ("height", "40px"),
            ("background-color", "#ffffff"),
            ("color", "#000000"),
            ("border-radius", "4px"),
            ("padding", "8px"),
            ("font-size", "16px"),
            ("text-align", "left"),
            ("border", "1px solid #ccc"),
            ("outline", "none"),
            ("transition", "border-color 0.2s ease-in-out"),
        ] {
            base.add_style(property, value);
        }
        Self {
            base,
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            change_key: None,
        }
    }

    /// Initial input value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Register a change handler and wire the input's emit glue. The
    /// normalized payload's `value` carries the input text.
    #[must_use]
    pub fn on_change<F>(mut self, events: &EventRegistry, handler: F) -> Self
    where
        F: Fn(EventPayload) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        let key = EventRegistry::event_key(self.base.id(), "change");
        events.register_fn(key.clone(), handler);
        self.change_key = Some(key);
        self
    }

    /// Disable the input.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override or add a CSS property.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.base.add_style(property, value);
        self
    }

    fn finalize_base(&self) -> ComponentBase {
        let mut base = self.base.clone();
        base.append_script(&format!(
            "\ndocument.getElementById(\"{id}\").addEventListener(\"focus\", function() {{\n    this.style.borderColor = \"#007bff\";\n}});\ndocument.getElementById(\"{id}\").addEventListener(\"blur\", function() {{\n    this.style.borderColor = \"#ccc\";\n}});\n",
            id = base.id()
        ));
        if self.disabled {
            base.add_style("cursor", "not-allowed");
            base.add_style("opacity", "0.6");
            base.add_style("background-color", "#f5f5f5");
        }
        base
    }
}

impl Component for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn render(&self) -> String {
        let base = self.finalize_base();
        let disabled_attr = if self.disabled {
            " disabled=\"disabled\""
        } else {
            ""
        };
        let onchange = match &self.change_key {
            Some(key) => format!(
                " onchange=\"Stinger.emit('{}', {{type: 'change', value: this.value}})\"",
                key
            ),
            None => String::new(),
        };

        format!(
            "{style}{script}<input type=\"text\" id=\"{id}\" class=\"{classes}\" value=\"{value}\" placeholder=\"{placeholder}\"{disabled}{onchange}>",
            style = base.style_tag(),
            script = base.script_tag(),
            id = base.id(),
            classes = base.class_attr(),
            value = self.value,
            placeholder = self.placeholder,
            disabled = disabled_attr,
            onchange = onchange,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_basics() {
        let html = TextInput::new("amount")
            .value("1")
            .placeholder("Increment amount")
            .render();
        assert!(html.contains("id=\"amount\""));
        assert!(html.contains("value=\"1\""));
        assert!(html.contains("placeholder=\"Increment amount\""));
        assert!(html.contains("stinger-text-input"));
    }

    #[test]
    fn test_change_handler_wired_with_value() {
        let events = EventRegistry::new();
        let input = TextInput::new("amount").on_change(&events, |p| {
            Ok(p.value.unwrap_or(json!(null)))
        });

        assert!(events.contains("amount_change"));
        let html = input.render();
        assert!(html
            .contains("Stinger.emit('amount_change', {type: 'change', value: this.value})"));
    }

    #[test]
    fn test_disabled_input_styling() {
        let html = TextInput::new("x").disabled(true).render();
        assert!(html.contains("disabled=\"disabled\""));
        assert!(html.contains("background-color: #f5f5f5;"));
    }
}
