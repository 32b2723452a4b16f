//! Selector types and matching.

mod matcher;
mod specificity;
mod types;

pub use matcher::{ElementMatchContext, ElementTree, SelectorMatcher};
pub use specificity::{Specificity, SpecificityWithOrder};
pub use types::*;
