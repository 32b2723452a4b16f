//! The polymorphic style value.
//!
//! A [`StyleValue`] is the typed result of parsing one property's tokens.
//! Values own all of their data and are never mutated after construction;
//! they can be cloned freely into as many style layers as need them.
//!
//! # Example
//!
//! ```
//! use chartkit_style::types::{ColorValue, StyleValue, ValuePair};
//!
//! let gradient = StyleValue::from(ValuePair::new(
//!     ColorValue::rgb(0, 255, 0).into(),
//!     ColorValue::rgb(255, 0, 0).into(),
//! ));
//! assert_eq!(gradient.to_string(), "rgb(0,255,0) rgb(255,0,0)");
//! ```

use std::fmt;

use super::{ColorValue, CssConstant, NumericValue};

/// A typed, immutable style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// One of a fixed set of named keywords.
    Constant(CssConstant),
    /// A magnitude with a unit.
    Numeric(NumericValue),
    /// An RGBA color.
    Color(ColorValue),
    /// An ordered pair of values.
    Pair(ValuePair),
    /// Several keywords accepted by a multi-value reader.
    List(Vec<StyleValue>),
}

impl StyleValue {
    /// Get the constant if this is a keyword value.
    pub fn as_constant(&self) -> Option<CssConstant> {
        match self {
            StyleValue::Constant(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the numeric value, if any.
    pub fn as_numeric(&self) -> Option<&NumericValue> {
        match self {
            StyleValue::Numeric(n) => Some(n),
            _ => None,
        }
    }

    /// Get the color value, if any.
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            StyleValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Get the pair, if any.
    pub fn as_pair(&self) -> Option<&ValuePair> {
        match self {
            StyleValue::Pair(p) => Some(p),
            _ => None,
        }
    }

    /// Get the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[StyleValue]> {
        match self {
            StyleValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Constant(c) => write!(f, "{}", c),
            StyleValue::Numeric(n) => write!(f, "{}", n),
            StyleValue::Color(c) => write!(f, "{}", c),
            StyleValue::Pair(p) => write!(f, "{}", p),
            StyleValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<CssConstant> for StyleValue {
    fn from(value: CssConstant) -> Self {
        StyleValue::Constant(value)
    }
}

impl From<NumericValue> for StyleValue {
    fn from(value: NumericValue) -> Self {
        StyleValue::Numeric(value)
    }
}

impl From<ColorValue> for StyleValue {
    fn from(value: ColorValue) -> Self {
        StyleValue::Color(value)
    }
}

impl From<ValuePair> for StyleValue {
    fn from(value: ValuePair) -> Self {
        StyleValue::Pair(value)
    }
}

/// An ordered two-element composite.
///
/// Order is significant: `(a, b)` and `(b, a)` are different values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePair {
    first: Box<StyleValue>,
    second: Box<StyleValue>,
}

impl ValuePair {
    /// Create a pair from its start and end values.
    pub fn new(first: StyleValue, second: StyleValue) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// The start (primary) value.
    pub fn first(&self) -> &StyleValue {
        &self.first
    }

    /// The end (secondary) value.
    pub fn second(&self) -> &StyleValue {
        &self.second
    }
}

impl fmt::Display for ValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
