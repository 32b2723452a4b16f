//! Style value types.

mod color;
pub mod constants;
mod numeric;
mod value;

pub use color::ColorValue;
pub use constants::CssConstant;
pub use numeric::{NumericUnit, NumericValue};
pub use value::{StyleValue, ValuePair};
