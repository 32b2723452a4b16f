//! Format-neutral element tree.
//!
//! Both wire formats read into and write from this tree, so the root type
//! can be checked before any model object is built.

use crate::error::{Error, Result};

/// An element with ordered attributes, child elements and optional text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Creates an element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an element holding only text.
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.set_text(text);
        element
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Gets an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute value, keeping the position of an existing one.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Sets an attribute unless `value` is empty.
    pub fn set_attribute_nonempty(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.set_attribute(name, value);
        }
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the element has attributes.
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Parses a required attribute with `parse`.
    pub fn parse_attribute<T>(&self, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<Option<T>> {
        match self.attribute(name) {
            None => Ok(None),
            Some(value) => parse(value).map(Some).ok_or_else(|| {
                Error::malformed(format!(
                    "invalid value '{}' for attribute '{}' of <{}>",
                    value, name, self.name
                ))
            }),
        }
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Returns the child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Adds a child element.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Creates and adds a child element with text content.
    pub fn add_child_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.children.push(Self::text_element(name, text));
    }

    /// Gets a child element by name (first match).
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Gets all child elements with the specified name.
    pub fn children_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the named child, if present.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }

    // ========================================================================
    // Text Content
    // ========================================================================

    /// Returns the text content, or `""`.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Returns true if this element has text content.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Sets the text content. Empty text clears it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
    }

    /// Appends to the text content.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Returns true if the element has no attributes, children or text.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && !self.has_text()
    }
}
