//! Chart definition documents.

mod element;
mod tree;

pub use element::ChartElement;
pub use tree::{ChartDocument, ElementId};
