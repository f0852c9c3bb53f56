//! # Component Base
//!
//! Shared id/style/class/script plumbing for all components.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use stinger_state::BindingSet;
use uuid::Uuid;

/// Class carried by every component element.
pub const COMPONENT_CLASS: &str = "stinger-component";

/// A renderable UI component.
pub trait Component {
    /// The element id used for state routing and styling.
    fn id(&self) -> &str;

    /// Render the HTML fragment.
    fn render(&self) -> String;
}

/// Common component internals: element id, scoped styles, class list,
/// and extra script.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    id: String,
    style: BTreeMap<String, String>,
    classes: Vec<String>,
    script: String,
}

impl ComponentBase {
    /// Create with a caller-chosen element id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: BTreeMap::new(),
            classes: vec![COMPONENT_CLASS.to_string()],
            script: String::new(),
        }
    }

    /// Create with a generated element id (`stinger-` prefixed).
    #[must_use]
    pub fn with_generated_id() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self::new(format!("stinger-{}", &suffix[..8]))
    }

    /// The element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set a CSS property on the component's scoped style.
    pub fn add_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.style.insert(property.into(), value.into());
    }

    /// Add a CSS class (duplicates ignored).
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Remove a CSS class. The base component class cannot be removed.
    pub fn remove_class(&mut self, class: &str) {
        if class != COMPONENT_CLASS {
            self.classes.retain(|c| c != class);
        }
    }

    /// Append raw JavaScript to the component's script tag.
    pub fn append_script(&mut self, script: &str) {
        self.script.push_str(script);
    }

    /// Append the rendered rules of a binding set to the script tag.
    pub fn append_bindings(&mut self, bindings: &BindingSet) {
        if !bindings.is_empty() {
            self.script.push('\n');
            self.script.push_str(&bindings.render());
            self.script.push('\n');
        }
    }

    /// Space-separated class attribute value.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Scoped `<style>` tag, empty string when no styles are set.
    #[must_use]
    pub fn style_tag(&self) -> String {
        if self.style.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        let _ = writeln!(out, "<style>\n#{} {{", self.id);
        for (property, value) in &self.style {
            let _ = writeln!(out, "    {}: {};", property, value);
        }
        out.push_str("}\n</style>\n");
        out
    }

    /// IIFE-wrapped `<script>` tag, empty string when no script is set.
    #[must_use]
    pub fn script_tag(&self) -> String {
        if self.script.is_empty() {
            return String::new();
        }
        format!(
            "<script>\n(function() {{\n{}\n}})();\n</script>\n",
            self.script.trim_end()
        )
    }
}
