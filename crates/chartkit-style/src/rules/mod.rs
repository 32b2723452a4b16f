//! Style rules and stylesheets.

mod rule;
mod stylesheet;

pub use rule::StyleRule;
pub use stylesheet::{StylePriority, StyleSheet};
