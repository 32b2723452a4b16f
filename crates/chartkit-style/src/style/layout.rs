//! The resolved style of one chart element.

use std::collections::HashMap;

use crate::keys::{self, StyleKey};
use crate::types::{ColorValue, CssConstant, NumericValue, StyleValue};

use super::StyleDeclarations;

/// Style values attached to one element after rules and inline styles are
/// applied.
///
/// Values are looked up by [`StyleKey`]. The typed accessors cover the
/// chart dialect's keys and return `None` when a key is unset or holds a
/// value of another shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStyle {
    values: HashMap<StyleKey, StyleValue>,
}

impl LayoutStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value set for a key.
    pub fn value(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.values.get(key)
    }

    /// Set a value directly.
    pub fn set_value(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.values.insert(key, value.into());
    }

    /// Copy every declared value on top of this style.
    pub fn apply(&mut self, declarations: &StyleDeclarations) {
        for (key, value) in declarations.iter() {
            self.values.insert(*key, value.clone());
        }
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys that are set, in key order.
    pub fn keys(&self) -> Vec<StyleKey> {
        let mut keys: Vec<_> = self.values.keys().copied().collect();
        keys.sort();
        keys
    }

    fn constant(&self, key: &StyleKey) -> Option<CssConstant> {
        self.value(key).and_then(StyleValue::as_constant)
    }

    /// The axis dimension; a list if several dimensions were given.
    pub fn axis_dimension(&self) -> Option<&StyleValue> {
        self.value(&keys::AXIS_DIMENSION)
    }

    pub fn axis_position(&self) -> Option<CssConstant> {
        self.constant(&keys::AXIS_POSITION)
    }

    pub fn axis_order(&self) -> Option<&NumericValue> {
        self.value(&keys::AXIS_ORDER).and_then(StyleValue::as_numeric)
    }

    pub fn axis_location(&self) -> Option<CssConstant> {
        self.constant(&keys::AXIS_LOCATION)
    }

    /// Gradient start and end colors.
    pub fn gradient_color(&self) -> Option<(ColorValue, ColorValue)> {
        let pair = self.value(&keys::GRADIENT_COLOR)?.as_pair()?;
        Some((*pair.first().as_color()?, *pair.second().as_color()?))
    }

    pub fn negative_bar_color(&self) -> Option<ColorValue> {
        self.value(&keys::NEGATIVE_BAR_COLOR)
            .and_then(StyleValue::as_color)
            .copied()
    }

    pub fn marker_height(&self) -> Option<&NumericValue> {
        self.value(&keys::MARKER_HEIGHT)
            .and_then(StyleValue::as_numeric)
    }

    pub fn chart_area_style(&self) -> Option<CssConstant> {
        self.constant(&keys::CHART_AREA_STYLE)
    }

    pub fn color(&self) -> Option<ColorValue> {
        self.value(&keys::CHART_COLOR)
            .and_then(StyleValue::as_color)
            .copied()
    }
}
