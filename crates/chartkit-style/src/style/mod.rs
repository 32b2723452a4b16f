//! Declared and resolved styles.

mod declarations;
mod layout;

pub use declarations::StyleDeclarations;
pub use layout::LayoutStyle;
