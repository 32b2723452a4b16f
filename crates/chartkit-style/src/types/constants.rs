//! Keyword constants of the chart dialect.
//!
//! Each enumerated property accepts a fixed set of [`CssConstant`]s. The
//! constants are grouped in one module per property, each with an `ALL`
//! slice in registration order.

use std::fmt;

/// A named keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CssConstant {
    name: &'static str,
}

impl CssConstant {
    /// Define a constant. The name is its CSS text.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The CSS text of the constant.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The form used to match tokens against this constant.
    pub fn canonical_name(&self) -> String {
        canonicalize(self.name)
    }
}

impl fmt::Display for CssConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Normalize identifier text for constant matching: upper-case, `-` to `_`.
pub fn canonicalize(text: &str) -> String {
    text.to_ascii_uppercase().replace('-', "_")
}

/// Values of `-x-chart-axis-dimension`.
pub mod axis_dimension {
    use super::CssConstant;

    pub const DOMAIN: CssConstant = CssConstant::new("domain");
    pub const RANGE: CssConstant = CssConstant::new("range");

    pub const ALL: &[CssConstant] = &[DOMAIN, RANGE];
}

/// Values of `-x-chart-axis-position`.
pub mod axis_position {
    use super::CssConstant;

    pub const PRIMARY: CssConstant = CssConstant::new("primary");
    pub const SECONDARY: CssConstant = CssConstant::new("secondary");

    pub const ALL: &[CssConstant] = &[PRIMARY, SECONDARY];
}

/// Values of `-x-chart-axis-location`.
pub mod axis_location {
    use super::CssConstant;

    pub const PRIMARY: CssConstant = CssConstant::new("primary");
    pub const SECONDARY: CssConstant = CssConstant::new("secondary");

    pub const ALL: &[CssConstant] = &[PRIMARY, SECONDARY];
}

/// Values of `-x-chart-area-style`.
pub mod area_style {
    use super::CssConstant;

    pub const MULTI: CssConstant = CssConstant::new("multi");

    pub const ALL: &[CssConstant] = &[MULTI];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form() {
        assert_eq!(canonicalize("primary"), "PRIMARY");
        assert_eq!(canonicalize("Top-Left"), "TOP_LEFT");
        assert_eq!(axis_dimension::DOMAIN.canonical_name(), "DOMAIN");
    }

    #[test]
    fn display_is_css_text() {
        assert_eq!(axis_position::SECONDARY.to_string(), "secondary");
    }
}
