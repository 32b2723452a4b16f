//! Chart model serialization to XML and mapped JSON.
//!
//! Both formats go through a neutral [`Element`] tree. On input the root
//! element is checked against [`ALLOWED_ROOTS`] and against the root the
//! entry point expects before any model value is constructed; anything else
//! fails with [`Error::DisallowedType`].
//!
//! Derived and transient fields are never written: legend visibility, pie
//! label visibility, pie slices and the horizontal/vertical axis views of
//! two-axis plots.
//!
//! # Example
//!
//! ```
//! use chartkit_model::model::{ChartModel, ChartTitle};
//! use chartkit_model::serializer::{self, Format};
//!
//! let model = ChartModel::new().with_title(ChartTitle::new("Revenue"));
//! let json = serializer::serialize(&model, Format::Json).unwrap();
//! assert_eq!(serializer::deserialize(&json, Format::Json).unwrap(), model);
//!
//! let err = serializer::deserialize("<script/>", Format::Xml).unwrap_err();
//! assert!(matches!(err, chartkit_model::Error::DisallowedType { .. }));
//! ```

mod convert;
mod json;
mod tree;
mod xml;

use std::fmt;

pub use tree::Element;

use crate::error::{Error, Result};
use crate::model::{ChartDataDefinition, ChartModel};

const TARGET: &str = "chartkit_model::serializer";

/// Root element of a serialized [`ChartModel`].
pub const CHART_ROOT: &str = "chartModel";
/// Root element of a serialized [`ChartDataDefinition`].
pub const CHART_DATA_ROOT: &str = "chartDataModel";
/// Root types accepted on input.
pub const ALLOWED_ROOTS: [&str; 2] = [CHART_ROOT, CHART_DATA_ROOT];

/// Wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Xml => f.write_str("xml"),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Indent the output.
    pub pretty: bool,
    /// Write an XML declaration. Ignored for JSON.
    pub declaration: bool,
}

impl SerializerOptions {
    /// Single-line output without a declaration.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            declaration: false,
        }
    }
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            declaration: true,
        }
    }
}

/// Serialize a chart model.
pub fn serialize(model: &ChartModel, format: Format) -> Result<String> {
    serialize_with(model, format, &SerializerOptions::default())
}

/// Serialize a chart model with explicit options.
pub fn serialize_with(
    model: &ChartModel,
    format: Format,
    options: &SerializerOptions,
) -> Result<String> {
    write_tree(&convert::chart_to_element(model), format, options)
}

/// Deserialize a chart model.
pub fn deserialize(input: &str, format: Format) -> Result<ChartModel> {
    let root = read_tree(input, format, CHART_ROOT)?;
    convert::chart_from_element(&root)
}

/// Serialize a data definition.
pub fn serialize_data_definition(
    definition: &ChartDataDefinition,
    format: Format,
) -> Result<String> {
    serialize_data_definition_with(definition, format, &SerializerOptions::default())
}

/// Serialize a data definition with explicit options.
pub fn serialize_data_definition_with(
    definition: &ChartDataDefinition,
    format: Format,
    options: &SerializerOptions,
) -> Result<String> {
    write_tree(&convert::data_definition_to_element(definition), format, options)
}

/// Deserialize a data definition.
pub fn deserialize_data_definition(input: &str, format: Format) -> Result<ChartDataDefinition> {
    let root = read_tree(input, format, CHART_DATA_ROOT)?;
    convert::data_definition_from_element(&root)
}

/// Parse `input` into an element tree without building a model.
pub fn parse_tree(input: &str, format: Format) -> Result<Element> {
    match format {
        Format::Json => json::parse(input),
        Format::Xml => xml::parse(input),
    }
}

/// Check that `root` is allow-listed and is the `expected` type.
pub fn check_root(root: &Element, expected: &str) -> Result<()> {
    let name = root.name();
    if !ALLOWED_ROOTS.contains(&name) || name != expected {
        tracing::warn!(target: TARGET, root = name, expected, "rejected document root");
        return Err(Error::disallowed(name));
    }
    Ok(())
}

fn read_tree(input: &str, format: Format, expected: &str) -> Result<Element> {
    let _span = tracing::debug_span!(target: TARGET, "deserialize", %format, expected).entered();
    let root = parse_tree(input, format)?;
    check_root(&root, expected)?;
    tracing::debug!(target: TARGET, children = root.children().len(), "document accepted");
    Ok(root)
}

fn write_tree(root: &Element, format: Format, options: &SerializerOptions) -> Result<String> {
    let _span = tracing::debug_span!(target: TARGET, "serialize", %format, root = root.name()).entered();
    match format {
        Format::Json => json::write(root, options),
        Format::Xml => xml::write(root, options),
    }
}
