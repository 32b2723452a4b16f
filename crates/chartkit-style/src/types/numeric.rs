//! Numeric style values.

use std::fmt;

/// Unit category of a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericUnit {
    /// A plain number.
    Number,
    /// A percentage.
    Percentage,
    /// Pixels.
    Px,
    /// Relative to the font size.
    Em,
    /// Relative to the x-height.
    Ex,
    /// Relative to the root font size.
    Rem,
    /// Points.
    Pt,
    /// Picas.
    Pc,
    /// Inches.
    In,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Degrees.
    Deg,
    /// Radians.
    Rad,
}

impl NumericUnit {
    /// Parse a CSS dimension unit (case-insensitive).
    pub fn from_css(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Px),
            "em" => Some(Self::Em),
            "ex" => Some(Self::Ex),
            "rem" => Some(Self::Rem),
            "pt" => Some(Self::Pt),
            "pc" => Some(Self::Pc),
            "in" => Some(Self::In),
            "cm" => Some(Self::Cm),
            "mm" => Some(Self::Mm),
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            _ => None,
        }
    }

    /// The suffix used when rendering a value in this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Number => "",
            Self::Percentage => "%",
            Self::Px => "px",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Rem => "rem",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::In => "in",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Deg => "deg",
            Self::Rad => "rad",
        }
    }
}

/// A magnitude with a unit.
///
/// Equality is exact on both magnitude and unit, so `1` and `1px` differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericValue {
    value: f32,
    unit: NumericUnit,
}

impl NumericValue {
    /// Create a numeric value.
    pub const fn new(value: f32, unit: NumericUnit) -> Self {
        Self { value, unit }
    }

    /// Create a plain number.
    pub const fn number(value: f32) -> Self {
        Self::new(value, NumericUnit::Number)
    }

    /// Create a percentage (`50.0` means 50%).
    pub const fn percentage(value: f32) -> Self {
        Self::new(value, NumericUnit::Percentage)
    }

    /// Create a pixel length.
    pub const fn px(value: f32) -> Self {
        Self::new(value, NumericUnit::Px)
    }

    /// The magnitude.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The unit.
    pub fn unit(&self) -> NumericUnit {
        self.unit
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_part_of_equality() {
        assert_ne!(NumericValue::number(1.0), NumericValue::px(1.0));
        assert_eq!(NumericValue::percentage(50.0), NumericValue::percentage(50.0));
    }

    #[test]
    fn display_appends_suffix() {
        assert_eq!(NumericValue::number(1.0).to_string(), "1");
        assert_eq!(NumericValue::percentage(12.5).to_string(), "12.5%");
        assert_eq!(NumericValue::new(4.0, NumericUnit::Pt).to_string(), "4pt");
    }

    #[test]
    fn units_parse_case_insensitively() {
        assert_eq!(NumericUnit::from_css("PX"), Some(NumericUnit::Px));
        assert_eq!(NumericUnit::from_css("furlong"), None);
    }
}
