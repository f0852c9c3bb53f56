//! # State Bindings
//!
//! Declarative state→DOM rules. A binding names a state key, a target
//! element, and how the new value is applied; the generated JavaScript is
//! consumed by the browser runtime (`Stinger.onStateChange`).
//!
//! Accumulation is append-only per component, in call order, without
//! deduplication — rendering twice the same rule is the caller's choice.

use std::fmt;

/// How a bound element applies a new state value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingKind {
    /// Replace the element's text content.
    Text,
    /// Set the element's form value.
    Value,
    /// Set a named attribute.
    Attribute(String),
    /// Set a style property.
    Style(String),
    /// Apply a JS transform expression to the value, then set text content.
    Transform(String),
}

/// One declarative binding rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor {
    /// State key whose changes drive this binding.
    pub state_key: String,
    /// Id of the target DOM element.
    pub target_id: String,
    /// How the value is applied.
    pub kind: BindingKind,
}

impl BindingDescriptor {
    /// Render the JS rule for this binding.
    #[must_use]
    pub fn render(&self) -> String {
        let action = match &self.kind {
            BindingKind::Text => format!(
                "document.getElementById('{}').textContent = newState;",
                self.target_id
            ),
            BindingKind::Value => format!(
                "document.getElementById('{}').value = newState;",
                self.target_id
            ),
            BindingKind::Attribute(name) => format!(
                "document.getElementById('{}').setAttribute('{}', newState);",
                self.target_id, name
            ),
            BindingKind::Style(property) => format!(
                "document.getElementById('{}').style['{}'] = newState;",
                self.target_id, property
            ),
            BindingKind::Transform(expr) => format!(
                "document.getElementById('{}').textContent = {}(newState);",
                self.target_id, expr
            ),
        };
        format!(
            "Stinger.onStateChange('{}', function(newState) {{\n    {}\n}});",
            self.state_key, action
        )
    }
}

impl fmt::Display for BindingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Append-only accumulator of binding rules for one component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    bindings: Vec<BindingDescriptor>,
}

impl BindingSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a state to an element's text content.
    pub fn bind_text(&mut self, state_key: impl Into<String>, target_id: impl Into<String>) {
        self.push(state_key, target_id, BindingKind::Text);
    }

    /// Bind a state to an input element's value.
    pub fn bind_value(&mut self, state_key: impl Into<String>, target_id: impl Into<String>) {
        self.push(state_key, target_id, BindingKind::Value);
    }

    /// Bind a state to an arbitrary attribute.
    pub fn bind_attribute(
        &mut self,
        state_key: impl Into<String>,
        target_id: impl Into<String>,
        attribute: impl Into<String>,
    ) {
        self.push(state_key, target_id, BindingKind::Attribute(attribute.into()));
    }

    /// Bind a state to a style property.
    pub fn bind_style(
        &mut self,
        state_key: impl Into<String>,
        target_id: impl Into<String>,
        property: impl Into<String>,
    ) {
        self.push(state_key, target_id, BindingKind::Style(property.into()));
    }

    /// Bind a state through a JS transform expression.
    pub fn bind_transform(
        &mut self,
        state_key: impl Into<String>,
        target_id: impl Into<String>,
        transform: impl Into<String>,
    ) {
        self.push(state_key, target_id, BindingKind::Transform(transform.into()));
    }

    /// The accumulated descriptors, in call order.
    #[must_use]
    pub fn descriptors(&self) -> &[BindingDescriptor] {
        &self.bindings
    }

    /// Render all rules, call order, newline-joined.
    #[must_use]
    pub fn render(&self) -> String {
        self.bindings
            .iter()
            .map(BindingDescriptor::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of accumulated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no rules were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn push(
        &mut self,
        state_key: impl Into<String>,
        target_id: impl Into<String>,
        kind: BindingKind,
    ) {
        self.bindings.push(BindingDescriptor {
            state_key: state_key.into(),
            target_id: target_id.into(),
            kind,
        });
    }
}
