//! Style resolution for chart documents.

mod cache;
mod cascade;
mod engine;

pub use cache::DeclarationCache;
pub use cascade::{cascade, matching_rules};
pub use engine::{DocumentStyles, StyleResolver};
