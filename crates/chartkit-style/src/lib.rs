//! Vendor-extension CSS dialect for chart documents.
//!
//! This crate turns chart style text into typed values:
//!
//! - **Readers**: keyword, numeric, color and gradient readers that decode a
//!   property value from a token stream, plus compound readers that fan one
//!   value out into several style keys atomically
//! - **Registry**: an immutable map from property names such as
//!   `-x-chart-axis-type` to their readers
//! - **Parsing**: declaration lists and stylesheets parsed with `cssparser`
//! - **Resolution**: rules and inline styles applied to the elements of a
//!   chart document
//!
//! # Example
//!
//! ```
//! use chartkit_style::prelude::*;
//! use chartkit_style::types::constants::{axis_dimension, axis_position};
//!
//! let registry = StyleRegistry::chart();
//! let declarations = parse_declarations("-x-chart-axis-type: domain primary 1", &registry);
//!
//! assert_eq!(
//!     declarations.get(&keys::AXIS_DIMENSION),
//!     Some(&axis_dimension::DOMAIN.into())
//! );
//! assert_eq!(
//!     declarations.get(&keys::AXIS_POSITION),
//!     Some(&axis_position::PRIMARY.into())
//! );
//! ```

pub mod document;
pub mod handlers;
pub mod keys;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod rules;
pub mod selector;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::{ChartDocument, ChartElement, ElementId};
    pub use crate::handlers::{
        ColorPairReadHandler, ColorReadHandler, CompoundOutcome, CompoundReadHandler,
        NumericReadHandler, OneOfConstantsReadHandler, PropertyHandler, ReadHandler,
        StyleValues, ValueHandler,
    };
    pub use crate::keys::{self, StyleKey};
    pub use crate::parser::{
        LexicalUnit, ParseOptions, TokenStream, parse_declarations, parse_stylesheet, tokenize,
    };
    pub use crate::registry::{PropertyEntry, StyleRegistry};
    pub use crate::resolve::{DocumentStyles, StyleResolver};
    pub use crate::rules::{StylePriority, StyleRule, StyleSheet};
    pub use crate::selector::{Combinator, Selector, SelectorPart, Specificity};
    pub use crate::style::{LayoutStyle, StyleDeclarations};
    pub use crate::types::{ColorValue, CssConstant, NumericUnit, NumericValue, StyleValue, ValuePair};
}
