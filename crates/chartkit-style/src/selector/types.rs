//! Selector type definitions.

use std::fmt;

use crate::Result;

/// How a selector part constrains the element tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagMatch {
    /// `*`
    Any,
    /// A tag such as `Axis` or `Series`. Compared case-sensitively.
    Named(String),
}

/// Relationship between two adjacent selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: the left part matches some ancestor.
    Descendant,
    /// `>`: the left part matches the parent.
    Child,
}

impl Combinator {
    fn separator(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
        }
    }
}

/// One compound selector, e.g. `Series#s1.negative`.
///
/// An empty part (no tag, id or classes) never appears in a parsed selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    pub tag: Option<TagMatch>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl SelectorPart {
    /// Matches elements with the given tag.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag: Some(TagMatch::Named(name.into())),
            ..Self::default()
        }
    }

    /// Matches every element.
    pub fn any() -> Self {
        Self {
            tag: Some(TagMatch::Any),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Whether the part has no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(TagMatch::Any) => f.write_str("*")?,
            Some(TagMatch::Named(tag)) => f.write_str(tag)?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        self.classes
            .iter()
            .try_for_each(|class| write!(f, ".{}", class))
    }
}

/// A selector such as `Plot.bar > Series`.
///
/// `parts` are ordered left to right; `combinators[i]` joins `parts[i]` and
/// `parts[i + 1]`. The last part is the subject, the element being styled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Parse selector text.
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse_selector(text)
    }

    /// A selector made of a single part.
    pub fn single(part: SelectorPart) -> Self {
        Self {
            parts: vec![part],
            combinators: vec![],
        }
    }

    /// `Tag`
    pub fn tag(name: impl Into<String>) -> Self {
        Self::single(SelectorPart::tag(name))
    }

    /// `*`
    pub fn universal() -> Self {
        Self::single(SelectorPart::any())
    }

    /// `.class`
    pub fn class(class: impl Into<String>) -> Self {
        Self::single(SelectorPart::default().with_class(class))
    }

    /// `#id`
    pub fn id(id: impl Into<String>) -> Self {
        Self::single(SelectorPart::default().with_id(id))
    }

    /// Append `part` as a new subject joined by `combinator`.
    pub fn then(mut self, combinator: Combinator, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(combinator);
        }
        self.parts.push(part);
        self
    }

    /// Append a descendant part.
    pub fn descendant(self, part: SelectorPart) -> Self {
        self.then(Combinator::Descendant, part)
    }

    /// Append a child part.
    pub fn child(self, part: SelectorPart) -> Self {
        self.then(Combinator::Child, part)
    }

    /// The rightmost part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.parts.split_first() else {
            return Ok(());
        };
        write!(f, "{}", first)?;
        for (part, combinator) in rest.iter().zip(&self.combinators) {
            write!(f, "{}{}", combinator.separator(), part)?;
        }
        Ok(())
    }
}
