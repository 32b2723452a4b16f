//! Property value readers.
//!
//! A reader turns the lexical units of one declaration value into a typed
//! [`StyleValue`]. Readers never fail loudly: input they cannot handle
//! yields `None` and leaves the stream where it was.
//!
//! Single-key properties use a [`ValueHandler`]; properties that set several
//! keys at once use a [`CompoundReadHandler`]. Both are wrapped by
//! [`PropertyHandler`], which is what the registry stores.

mod color;
mod compound;
mod constants;
mod numeric;

use std::collections::HashMap;

use crate::keys::StyleKey;
use crate::parser::TokenStream;
use crate::types::StyleValue;

pub use color::{ColorPairReadHandler, ColorReadHandler};
pub use compound::{CompoundOutcome, CompoundPart, CompoundReadHandler};
pub use constants::OneOfConstantsReadHandler;
pub use numeric::NumericReadHandler;

/// Values produced by one declaration, keyed by the style key they set.
pub type StyleValues = HashMap<StyleKey, StyleValue>;

/// Reads a single typed value from a token stream.
///
/// On success the stream is positioned after the consumed units. On `None`
/// the stream is left at the position it had on entry.
pub trait ReadHandler {
    /// Read a value for `key` starting at the stream's current unit.
    fn create_value(&self, key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue>;
}

/// The closed set of single-value readers.
#[derive(Debug, Clone)]
pub enum ValueHandler {
    Constants(OneOfConstantsReadHandler),
    Numeric(NumericReadHandler),
    Color(ColorReadHandler),
    ColorPair(ColorPairReadHandler),
}

impl ReadHandler for ValueHandler {
    fn create_value(&self, key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue> {
        match self {
            ValueHandler::Constants(h) => h.create_value(key, stream),
            ValueHandler::Numeric(h) => h.create_value(key, stream),
            ValueHandler::Color(h) => h.create_value(key, stream),
            ValueHandler::ColorPair(h) => h.create_value(key, stream),
        }
    }
}

impl From<OneOfConstantsReadHandler> for ValueHandler {
    fn from(handler: OneOfConstantsReadHandler) -> Self {
        ValueHandler::Constants(handler)
    }
}

impl From<NumericReadHandler> for ValueHandler {
    fn from(handler: NumericReadHandler) -> Self {
        ValueHandler::Numeric(handler)
    }
}

impl From<ColorReadHandler> for ValueHandler {
    fn from(handler: ColorReadHandler) -> Self {
        ValueHandler::Color(handler)
    }
}

impl From<ColorPairReadHandler> for ValueHandler {
    fn from(handler: ColorPairReadHandler) -> Self {
        ValueHandler::ColorPair(handler)
    }
}

/// How a registered property decodes its value.
#[derive(Debug, Clone)]
pub enum PropertyHandler {
    /// Sets exactly one key.
    Value { key: StyleKey, handler: ValueHandler },
    /// Sets several keys atomically.
    Compound(CompoundReadHandler),
}

impl PropertyHandler {
    /// Single-key property.
    pub fn value(key: StyleKey, handler: impl Into<ValueHandler>) -> Self {
        PropertyHandler::Value {
            key,
            handler: handler.into(),
        }
    }

    /// Every key the property may set.
    pub fn affected_keys(&self) -> Vec<StyleKey> {
        match self {
            PropertyHandler::Value { key, .. } => vec![*key],
            PropertyHandler::Compound(compound) => compound.affected_keys(),
        }
    }

    /// Decode the whole value.
    ///
    /// The value must be consumed entirely; trailing units make the
    /// declaration malformed and nothing is produced.
    pub fn parse(&self, stream: &mut TokenStream<'_>) -> Option<StyleValues> {
        let start = stream.state();

        let values = match self {
            PropertyHandler::Value { key, handler } => {
                let value = handler.create_value(key, stream)?;
                HashMap::from([(*key, value)])
            }
            PropertyHandler::Compound(compound) => compound.create_values(stream)?,
        };

        if stream.is_exhausted() {
            Some(values)
        } else {
            stream.reset(&start);
            None
        }
    }
}

impl From<CompoundReadHandler> for PropertyHandler {
    fn from(handler: CompoundReadHandler) -> Self {
        PropertyHandler::Compound(handler)
    }
}
