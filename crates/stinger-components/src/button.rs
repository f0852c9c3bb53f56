//! # Button
//!
//! A clickable button. With a click handler attached it registers under
//! the `"{id}_click"` event key and emits
//! `Stinger.emit('{id}_click', {type: 'click'})` from the browser.

use crate::base::{Component, ComponentBase};
use serde_json::Value;
use stinger_events::{EventPayload, EventRegistry};
use stinger_state::BindingSet;

/// A customizable button component.
#[derive(Clone)]
pub struct Button {
    base: ComponentBase,
    label: String,
    disabled: bool,
    click_key: Option<String>,
}

impl Button {
    /// Create a button with the default look.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = ComponentBase::new(id);
        base.add_class("stinger-button");
        for (property, value) in [
            ("width", "auto"),
            ("height", "40px"),
            ("background-color", "#007bff"),
            ("color", "#ffffff"),
            ("border-radius", "4px"),
            ("padding", "8px 16px"),
            ("font-size", "16px"),
            ("border", "none"),
            ("cursor", "pointer"),
            ("opacity", "1"),
            ("transition", "opacity 0.2s ease-in-out"),
        ] {
            base.add_style(property, value);
        }
        Self {
            base,
            label: label.into(),
            disabled: false,
            click_key: None,
        }
    }

    /// Register a click handler and wire the button's emit glue.
    #[must_use]
    pub fn on_click<F>(mut self, events: &EventRegistry, handler: F) -> Self
    where
        F: Fn(EventPayload) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        let key = EventRegistry::event_key(self.base.id(), "click");
        events.register_fn(key.clone(), handler);
        self.click_key = Some(key);
        self
    }

    /// Disable the button (no hover effect, `disabled` attribute set).
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

    /// Append raw JavaScript to the button's script tag.
    #[must_use]
    pub fn script(mut self, script: &str) -> Self {
        self.base.append_script(script);
        self
    }

    /// Attach state bindings to the button's script tag.
    #[must_use]
    pub fn bindings(mut self, bindings: &BindingSet) -> Self {
        self.base.append_bindings(bindings);
        self
    }

    fn finalize_base(&self) -> ComponentBase {
        let mut base = self.base.clone();
        if self.disabled {
            base.add_style("cursor", "not-allowed");
            base.add_style("opacity", "0.6");
        } else {
            base.append_script(&format!(
                "\ndocument.getElementById(\"{id}\").addEventListener(\"mouseover\", function() {{\n    this.style.opacity = \"0.8\";\n}});\ndocument.getElementById(\"{id}\").addEventListener(\"mouseout\", function() {{\n    this.style.opacity = \"1\";\n}});\n",
                id = base.id()
            ));
        }
        base
    }
}

impl Component for Button {
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
        let onclick = match &self.click_key {
            Some(key) => format!(
                " onclick=\"Stinger.emit('{}', {{type: 'click'}})\"",
                key
            ),
            None => String::new(),
        };

        format!(
            "{style}{script}<button id=\"{id}\" class=\"{classes}\"{disabled}{onclick}>{label}</button>",
            style = base.style_tag(),
            script = base.script_tag(),
            id = base.id(),
            classes = base.class_attr(),
            disabled = disabled_attr,
            onclick = onclick,
            label = self.label,
        )
    }
}
