//! Property name to reader registry.
//!
//! The registry maps each property name of the dialect to the reader that
//! decodes its value and the style keys it may set. A registry is built once
//! with [`StyleRegistryBuilder`] and is read-only afterwards, so a single
//! instance can be shared between threads.
//!
//! # Example
//!
//! ```
//! use chartkit_style::keys::AXIS_POSITION;
//! use chartkit_style::registry::{properties, StyleRegistry};
//!
//! let registry = StyleRegistry::chart();
//! let entry = registry.lookup(properties::AXIS_TYPE).unwrap();
//! assert!(entry.affected_keys().contains(&AXIS_POSITION));
//! assert!(registry.lookup("-x-chart-unknown").is_none());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::handlers::{
    ColorPairReadHandler, ColorReadHandler, CompoundReadHandler, NumericReadHandler,
    OneOfConstantsReadHandler, PropertyHandler, ValueHandler,
};
use crate::keys::{self, StyleKey};
use crate::logging::targets;
use crate::types::constants::{area_style, axis_dimension, axis_location, axis_position};

/// Property names of the chart dialect.
pub mod properties {
    pub const AXIS_TYPE: &str = "-x-chart-axis-type";
    pub const AXIS_DIMENSION: &str = "-x-chart-axis-dimension";
    pub const AXIS_POSITION: &str = "-x-chart-axis-position";
    pub const AXIS_ORDER: &str = "-x-chart-axis-order";
    pub const AXIS_LOCATION: &str = "-x-chart-axis-location";
    pub const GRADIENT_COLOR: &str = "-x-chart-gradient-color";
    pub const NEGATIVE_BAR_COLOR: &str = "-x-chart-negative-bar-color";
    pub const MARKER_HEIGHT: &str = "-x-chart-marker-height";
    pub const AREA_STYLE: &str = "-x-chart-area-style";
    pub const COLOR: &str = "color";
}

/// A registered property.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    name: String,
    handler: PropertyHandler,
    affected_keys: Vec<StyleKey>,
}

impl PropertyEntry {
    /// The property name, lower-case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reader for the property's value.
    pub fn handler(&self) -> &PropertyHandler {
        &self.handler
    }

    /// Every key the property may set, in the reader's order.
    pub fn affected_keys(&self) -> &[StyleKey] {
        &self.affected_keys
    }
}

/// Immutable mapping from property names to readers.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: HashMap<String, PropertyEntry>,
}

impl StyleRegistry {
    /// Start building a registry.
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::default()
    }

    /// The standard chart dialect.
    pub fn chart() -> Self {
        Self::builder()
            .register(properties::AXIS_TYPE, CompoundReadHandler::axis_type())
            .register_value(
                properties::AXIS_DIMENSION,
                keys::AXIS_DIMENSION,
                OneOfConstantsReadHandler::with_values(true, axis_dimension::ALL),
            )
            .register_value(
                properties::AXIS_POSITION,
                keys::AXIS_POSITION,
                OneOfConstantsReadHandler::with_values(false, axis_position::ALL),
            )
            .register_value(
                properties::AXIS_ORDER,
                keys::AXIS_ORDER,
                NumericReadHandler::new(),
            )
            .register_value(
                properties::AXIS_LOCATION,
                keys::AXIS_LOCATION,
                OneOfConstantsReadHandler::with_values(false, axis_location::ALL),
            )
            .register_value(
                properties::GRADIENT_COLOR,
                keys::GRADIENT_COLOR,
                ColorPairReadHandler::new(),
            )
            .register_value(
                properties::NEGATIVE_BAR_COLOR,
                keys::NEGATIVE_BAR_COLOR,
                ColorReadHandler::new(),
            )
            .register_value(
                properties::MARKER_HEIGHT,
                keys::MARKER_HEIGHT,
                NumericReadHandler::new(),
            )
            .register_value(
                properties::AREA_STYLE,
                keys::CHART_AREA_STYLE,
                OneOfConstantsReadHandler::with_values(false, area_style::ALL),
            )
            .register_value(properties::COLOR, keys::CHART_COLOR, ColorReadHandler::new())
            .build()
    }

    /// Look up a property by name. Names are matched case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&PropertyEntry> {
        match self.entries.get(name) {
            Some(entry) => Some(entry),
            None => self.entries.get(&name.to_ascii_lowercase()),
        }
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered property names, sorted.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Builder for [`StyleRegistry`].
#[derive(Debug, Default)]
pub struct StyleRegistryBuilder {
    entries: HashMap<String, PropertyEntry>,
}

impl StyleRegistryBuilder {
    /// Register a property. Registering a name twice replaces the first entry.
    pub fn register(mut self, name: &str, handler: impl Into<PropertyHandler>) -> Self {
        let name = name.to_ascii_lowercase();
        let handler = handler.into();
        let affected_keys = handler.affected_keys();

        let entry = PropertyEntry {
            name: name.clone(),
            handler,
            affected_keys,
        };
        if let Some(previous) = self.entries.insert(name, entry) {
            tracing::debug!(
                target: targets::REGISTRY,
                property = %previous.name,
                "property re-registered"
            );
        }
        self
    }

    /// Register a property that sets a single key.
    pub fn register_value(
        self,
        name: &str,
        key: StyleKey,
        handler: impl Into<ValueHandler>,
    ) -> Self {
        self.register(name, PropertyHandler::value(key, handler))
    }

    /// Finish building.
    pub fn build(self) -> StyleRegistry {
        tracing::trace!(
            target: targets::REGISTRY,
            properties = self.entries.len(),
            "style registry built"
        );
        StyleRegistry {
            entries: self.entries,
        }
    }
}

/// The process-wide chart dialect registry, built on first use.
pub fn global() -> &'static StyleRegistry {
    static GLOBAL: OnceLock<StyleRegistry> = OnceLock::new();
    GLOBAL.get_or_init(StyleRegistry::chart)
}
