//! # Container
//!
//! A flex-layout wrapper around child fragments. Children are rendered
//! eagerly in insertion order; a child can be any component or a raw HTML
//! string.

use crate::base::Component;
use std::collections::BTreeMap;

/// A responsive flex container.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    children: Vec<String>,
    style: BTreeMap<String, String>,
    extra_classes: Vec<String>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let mut style = BTreeMap::new();
        // Responsive defaults.
        style.insert("box-sizing".to_string(), "border-box".to_string());
        style.insert("display".to_string(), "flex".to_string());
        Self {
            id: id.into(),
            children: Vec::new(),
            style,
            extra_classes: Vec::new(),
        }
    }

    /// Append a component child.
    #[must_use]
    pub fn child(mut self, component: &impl Component) -> Self {
        self.children.push(component.render());
        self
    }

    /// Append a raw HTML child.
    #[must_use]
    pub fn child_html(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    /// Flex direction (`row`, `column`, ...).
    #[must_use]
    pub fn flex_direction(self, value: impl Into<String>) -> Self {
        self.style("flex-direction", value)
    }

    /// Main-axis alignment.
    #[must_use]
    pub fn justify_content(self, value: impl Into<String>) -> Self {
        self.style("justify-content", value)
    }

    /// Cross-axis alignment.
    #[must_use]
    pub fn align_items(self, value: impl Into<String>) -> Self {
        self.style("align-items", value)
    }

    /// Gap between flex items.
    #[must_use]
    pub fn gap(self, value: impl Into<String>) -> Self {
        self.style("gap", value)
    }

    /// Padding around the content.
    #[must_use]
    pub fn padding(self, value: impl Into<String>) -> Self {
        self.style("padding", value)
    }

    /// Margin around the container.
    #[must_use]
    pub fn margin(self, value: impl Into<String>) -> Self {
        self.style("margin", value)
    }

    /// Container width.
    #[must_use]
    pub fn width(self, value: impl Into<String>) -> Self {
        self.style("width", value)
    }

    /// Maximum width.
    #[must_use]
    pub fn max_width(self, value: impl Into<String>) -> Self {
        self.style("max-width", value)
    }

    /// Background color.
    #[must_use]
    pub fn background_color(self, value: impl Into<String>) -> Self {
        self.style("background-color", value)
    }

    /// Border radius.
    #[must_use]
    pub fn border_radius(self, value: impl Into<String>) -> Self {
        self.style("border-radius", value)
    }

    /// Any CSS property.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Additional CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.extra_classes.push(class.into());
        self
    }

    fn style_attr(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Component for Container {
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&self) -> String {
        let mut classes = vec!["stinger-container".to_string()];
        classes.extend(self.extra_classes.iter().cloned());
        format!(
            "<div class=\"{classes}\" id=\"{id}\" style=\"{style}\">{children}</div>",
            classes = classes.join(" "),
            id = self.id,
            style = self.style_attr(),
            children = self.children.join(""),
        )
    }
}
