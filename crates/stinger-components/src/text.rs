//! # Text Components
//!
//! Text, Heading (h1-h6), and Paragraph over a shared [`TextStyle`].

use crate::base::{Component, ComponentBase};
use std::collections::BTreeMap;

/// Common typography settings for text components.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub color: String,
    pub font_size: String,
    pub font_weight: String,
    pub margin: String,
    pub text_align: String,
    pub line_height: String,
    /// Any further CSS properties.
    pub extra: BTreeMap<String, String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            font_size: "1rem".to_string(),
            font_weight: "normal".to_string(),
            margin: "0".to_string(),
            text_align: "left".to_string(),
            line_height: "1.5".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl TextStyle {
    fn apply(&self, base: &mut ComponentBase) {
        base.add_style("color", &self.color);
        base.add_style("font-size", &self.font_size);
        base.add_style("font-weight", &self.font_weight);
        base.add_style("margin", &self.margin);
        base.add_style("text-align", &self.text_align);
        base.add_style("line-height", &self.line_height);
        for (property, value) in &self.extra {
            base.add_style(property, value);
        }
    }
}

fn render_text_element(base: &ComponentBase, tag: &str, text: &str) -> String {
    format!(
        "{style}{script}<{tag} id=\"{id}\" class=\"{classes}\">{text}</{tag}>",
        style = base.style_tag(),
        script = base.script_tag(),
        tag = tag,
        id = base.id(),
        classes = base.class_attr(),
        text = text,
    )
}

/// Inline text (`<span>`).
#[derive(Clone)]
pub struct Text {
    base: ComponentBase,
    text: String,
}

impl Text {
    /// Create inline text with default typography.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_style(id, text, TextStyle::default())
    }

    /// Create inline text with explicit typography.
    #[must_use]
    pub fn with_style(
        id: impl Into<String>,
        text: impl Into<String>,
        style: TextStyle,
    ) -> Self {
        let mut base = ComponentBase::new(id);
        base.add_class("stinger-text");
        style.apply(&mut base);
        Self {
            base,
            text: text.into(),
        }
    }
}

impl Component for Text {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn render(&self) -> String {
        render_text_element(&self.base, "span", &self.text)
    }
}

/// Heading (`<h1>`..`<h6>`).
#[derive(Clone)]
pub struct Heading {
    base: ComponentBase,
    text: String,
    level: u8,
}

impl Heading {
    /// Default font sizes per heading level 1..=6.
    const DEFAULT_SIZES: [&'static str; 6] =
        ["2.5rem", "2rem", "1.75rem", "1.5rem", "1.25rem", "1rem"];

    /// Create a heading. `level` is clamped to 1..=6.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8) -> Self {
        let level = level.clamp(1, 6);
        let style = TextStyle {
            font_size: Self::DEFAULT_SIZES[(level - 1) as usize].to_string(),
            font_weight: "bold".to_string(),
            margin: "0.5em 0".to_string(),
            line_height: "1.2".to_string(),
            ..TextStyle::default()
        };
        let mut base = ComponentBase::new(id);
        base.add_class("stinger-heading");
        style.apply(&mut base);
        Self {
            base,
            text: text.into(),
            level,
        }
    }

    /// Override or add a CSS property.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.base.add_style(property, value);
        self
    }
}

impl Component for Heading {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn render(&self) -> String {
        render_text_element(&self.base, &format!("h{}", self.level), &self.text)
    }
}

/// Paragraph (`<p>`).
#[derive(Clone)]
pub struct Paragraph {
    base: ComponentBase,
    text: String,
}

impl Paragraph {
    /// Create a paragraph with default typography.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let style = TextStyle {
            margin: "1em 0".to_string(),
            ..TextStyle::default()
        };
        let mut base = ComponentBase::new(id);
        base.add_class("stinger-paragraph");
        style.apply(&mut base);
        Self {
            base,
            text: text.into(),
        }
    }
}

impl Component for Paragraph {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn render(&self) -> String {
        render_text_element(&self.base, "p", &self.text)
    }
}
