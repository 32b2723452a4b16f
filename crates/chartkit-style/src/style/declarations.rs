//! Declared values of one declaration block.

use std::collections::HashMap;

use crate::handlers::StyleValues;
use crate::keys::StyleKey;
use crate::types::StyleValue;

/// The values set by one declaration block, keyed by style key.
///
/// A block is either a rule body (`Axis { ... }`) or an element's inline
/// `style` text. Later declarations of the same key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclarations {
    values: HashMap<StyleKey, StyleValue>,
}

impl StyleDeclarations {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the declared value of a key.
    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.values.get(key)
    }

    /// Declare a value, replacing any earlier one for the same key.
    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.values.insert(key, value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Declare every value produced by one property.
    pub fn extend(&mut self, values: StyleValues) {
        self.values.extend(values);
    }

    /// Remove a declared value.
    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.values.remove(key)
    }

    /// Whether the key is declared.
    pub fn contains(&self, key: &StyleKey) -> bool {
        self.values.contains_key(key)
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate declared values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by_key(|(key, _)| **key);
        entries.into_iter()
    }
}

impl FromIterator<(StyleKey, StyleValue)> for StyleDeclarations {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{AXIS_LOCATION, MARKER_HEIGHT};
    use crate::types::NumericValue;
    use crate::types::constants::axis_location;

    #[test]
    fn later_values_replace_earlier() {
        let mut declarations = StyleDeclarations::new().with(MARKER_HEIGHT, NumericValue::px(4.0));
        declarations.set(MARKER_HEIGHT, NumericValue::px(6.0));

        assert_eq!(declarations.len(), 1);
        assert_eq!(
            declarations.get(&MARKER_HEIGHT),
            Some(&NumericValue::px(6.0).into())
        );
    }

    #[test]
    fn iteration_is_ordered_by_key() {
        let declarations = StyleDeclarations::new()
            .with(MARKER_HEIGHT, NumericValue::number(1.0))
            .with(AXIS_LOCATION, axis_location::PRIMARY);

        let keys: Vec<_> = declarations.iter().map(|(key, _)| key.name()).collect();
        assert_eq!(keys, vec!["axis-location", "marker-height"]);
    }
}
