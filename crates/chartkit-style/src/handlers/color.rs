//! Readers for colors and gradient color pairs.

use crate::keys::StyleKey;
use crate::parser::{LexicalUnit, TokenStream};
use crate::types::{ColorValue, StyleValue, ValuePair};

use super::ReadHandler;

/// Reads a single color: a name, a hex value or an `rgb()`/`rgba()` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorReadHandler;

impl ColorReadHandler {
    /// Create a color reader.
    pub fn new() -> Self {
        Self
    }

    /// Convert a single token into a color.
    ///
    /// Function components must be integers in `0..=255` (or percentages);
    /// a fractional alpha in `0..=1` is scaled to `0..=255`.
    pub fn read(&self, token: Option<&LexicalUnit>) -> Option<ColorValue> {
        match token? {
            LexicalUnit::Ident(name) => ColorValue::named(name),
            LexicalUnit::Hash(hex) => ColorValue::from_hex(hex),
            LexicalUnit::Function { name, arguments }
                if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
            {
                let components = arguments
                    .iter()
                    .filter(|unit| !matches!(unit, LexicalUnit::Comma))
                    .enumerate()
                    .map(|(index, unit)| color_component(unit, index))
                    .collect::<Option<Vec<_>>>()?;
                ColorValue::from_components(&components)
            }
            _ => None,
        }
    }
}

fn color_component(unit: &LexicalUnit, index: usize) -> Option<i64> {
    match unit {
        LexicalUnit::Number(value) if value.fract() == 0.0 => Some(*value as i64),
        LexicalUnit::Number(value) if index == 3 && (0.0..=1.0).contains(value) => {
            Some((value * 255.0).round() as i64)
        }
        LexicalUnit::Percentage(value) => Some((value * 2.55).round() as i64),
        _ => None,
    }
}

impl ReadHandler for ColorReadHandler {
    fn create_value(&self, _key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue> {
        let color = self.read(stream.current())?;
        stream.advance();
        Some(color.into())
    }
}

/// Reads two consecutive colors into an ordered pair (gradient start, end).
///
/// Both colors must be present; a single color is not a valid gradient.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPairReadHandler {
    color: ColorReadHandler,
}

impl ColorPairReadHandler {
    /// Create a color-pair reader.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadHandler for ColorPairReadHandler {
    fn create_value(&self, key: &StyleKey, stream: &mut TokenStream<'_>) -> Option<StyleValue> {
        let state = stream.state();

        let first = self.color.create_value(key, stream);
        let second = first
            .as_ref()
            .and_then(|_| self.color.create_value(key, stream));

        match (first, second) {
            (Some(first), Some(second)) => Some(ValuePair::new(first, second).into()),
            _ => {
                stream.reset(&state);
                None
            }
        }
    }
}
