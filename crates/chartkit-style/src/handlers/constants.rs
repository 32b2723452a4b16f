//! Reader for enumerated keyword properties.

use crate::keys::StyleKey;
use crate::parser::{LexicalUnit, TokenStream};
use crate::types::constants::canonicalize;
use crate::types::{CssConstant, StyleValue};

use super::ReadHandler;

/// Accepts one of a fixed, ordered set of keyword constants.
///
/// Names are stored exactly as registered; token identifiers are
/// canonicalized (upper-case, `-` to `_`) before lookup, so `primary`,
/// `PRIMARY` and `Primary` all match a constant registered as `PRIMARY`.
///
/// # Example
///
/// ```
/// use chartkit_style::handlers::{OneOfConstantsReadHandler, ReadHandler};
/// use chartkit_style::keys::AXIS_POSITION;
/// use chartkit_style::parser::{tokenize, TokenStream};
/// use chartkit_style::types::constants::axis_position;
///
/// let handler = OneOfConstantsReadHandler::with_values(false, axis_position::ALL);
/// let units = tokenize("Secondary").unwrap();
/// let mut stream = TokenStream::new(&units);
///
/// let value = handler.create_value(&AXIS_POSITION, &mut stream);
/// assert_eq!(value, Some(axis_position::SECONDARY.into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OneOfConstantsReadHandler {
    allow_multiple_values: bool,
    values: Vec<(String, CssConstant)>,
}

impl OneOfConstantsReadHandler {
    /// Create a reader with no registered constants.
    pub fn new(allow_multiple_values: bool) -> Self {
        Self {
            allow_multiple_values,
            values: vec![],
        }
    }

    /// Create a reader accepting `constants` under their canonical names.
    pub fn with_values(allow_multiple_values: bool, constants: &[CssConstant]) -> Self {
        let mut handler = Self::new(allow_multiple_values);
        for constant in constants {
            handler.add_value(*constant);
        }
        handler
    }

    /// Register a constant under its canonical name.
    pub fn add_value(&mut self, constant: CssConstant) {
        self.add_value_named(constant.canonical_name(), constant);
    }

    /// Register a constant under an explicit name.
    ///
    /// The name is used verbatim, so it only matches tokens whose canonical
    /// form equals it.
    pub fn add_value_named(&mut self, name: impl Into<String>, constant: CssConstant) {
        let name = name.into();
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = constant;
        } else {
            self.values.push((name, constant));
        }
    }

    /// Whether more than one keyword may be accepted.
    pub fn allows_multiple_values(&self) -> bool {
        self.allow_multiple_values
    }

    /// Registered constants in registration order.
    pub fn values(&self) -> impl Iterator<Item = CssConstant> + '_ {
        self.values.iter().map(|(_, c)| *c)
    }

    /// Look up a single token.
    ///
    /// Returns `None` if the token is absent, is not an identifier, or does
    /// not name a registered constant.
    pub fn read(&self, token: Option<&LexicalUnit>) -> Option<CssConstant> {
        let ident = token?.as_ident()?;
        let canonical = canonicalize(ident);
        self.values
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, constant)| *constant)
    }
}

impl ReadHandler for OneOfConstantsReadHandler {
    fn create_value(&self, _key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue> {
        let first = self.read(stream.current())?;
        stream.advance();

        if !self.allow_multiple_values {
            return Some(first.into());
        }

        let mut values = vec![StyleValue::from(first)];
        while let Some(next) = self.read(stream.current()) {
            values.push(next.into());
            stream.advance();
        }

        if values.len() == 1 {
            values.pop()
        } else {
            Some(StyleValue::List(values))
        }
    }
}
