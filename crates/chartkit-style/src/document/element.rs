//! Chart document elements.

use std::fmt;

/// One node of a chart definition: a chart, plot, axis, series, label...
///
/// Elements carry what selectors match against (tag, id, classes) and an
/// optional inline `style` declaration list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartElement {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: Option<String>,
}

impl ChartElement {
    /// Create an element with a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Set the inline style text.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element has the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The inline style text, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Replace the inline style text.
    pub fn set_style(&mut self, style: Option<String>) {
        self.style = style;
    }
}

impl fmt::Display for ChartElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}
