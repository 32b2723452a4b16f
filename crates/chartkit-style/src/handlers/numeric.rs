//! Reader for single numeric values.

use crate::keys::StyleKey;
use crate::parser::{LexicalUnit, TokenStream};
use crate::types::{NumericUnit, NumericValue, StyleValue};

use super::ReadHandler;

/// Reads one number, percentage or dimension token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericReadHandler;

impl NumericReadHandler {
    /// Create a numeric reader.
    pub fn new() -> Self {
        Self
    }

    /// Convert a single token, keeping its unit.
    ///
    /// Dimensions with units outside [`NumericUnit`] are rejected.
    pub fn read(&self, token: Option<&LexicalUnit>) -> Option<NumericValue> {
        match token? {
            LexicalUnit::Number(value) => Some(NumericValue::number(*value)),
            LexicalUnit::Percentage(value) => Some(NumericValue::percentage(*value)),
            LexicalUnit::Dimension { value, unit } => {
                NumericUnit::from_css(unit).map(|unit| NumericValue::new(*value, unit))
            }
            _ => None,
        }
    }
}

impl ReadHandler for NumericReadHandler {
    fn create_value(&self, _key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue> {
        let value = self.read(stream.current())?;
        stream.advance();
        Some(value.into())
    }
}
