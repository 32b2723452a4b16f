//! Color style values and the standard color-name table.

use std::fmt;

/// An 8-bit RGBA color.
///
/// Equality is componentwise. Opaque colors render as `rgb(r,g,b)`, others
/// as `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel (255 is opaque).
    pub alpha: u8,
}

impl ColorValue {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Create a color with alpha.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a color from three or four integer components.
    ///
    /// Returns `None` for any other arity or if a component is outside
    /// `0..=255`.
    pub fn from_components(components: &[i64]) -> Option<Self> {
        let channel = |c: i64| u8::try_from(c).ok();
        match *components {
            [r, g, b] => Some(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => Some(Self::rgba(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                channel(a)?,
            )),
            _ => None,
        }
    }

    /// Resolve a standard color name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, color)| *color)
    }

    /// Parse a hex color without the leading `#` (`rgb`, `rrggbb`, `rrggbbaa`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        let nibble = |s: &str| byte(s).map(|n| n << 4 | n);
        match hex.len() {
            3 => Some(Self::rgb(
                nibble(&hex[0..1])?,
                nibble(&hex[1..2])?,
                nibble(&hex[2..3])?,
            )),
            6 => Some(Self::rgb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Some(Self::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Render as `#rrggbb` (or `#rrggbbaa` when translucent).
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    /// Whether the alpha channel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

// Common CSS/HTML color names
const NAMED_COLORS: &[(&str, ColorValue)] = &[
    ("black", ColorValue::BLACK),
    ("white", ColorValue::WHITE),
    ("red", ColorValue::RED),
    ("green", ColorValue::GREEN),
    ("blue", ColorValue::BLUE),
    ("yellow", ColorValue::YELLOW),
    ("cyan", ColorValue::CYAN),
    ("aqua", ColorValue::CYAN),
    ("magenta", ColorValue::MAGENTA),
    ("fuchsia", ColorValue::MAGENTA),
    ("gray", ColorValue::GRAY),
    ("grey", ColorValue::GRAY),
    ("darkgray", ColorValue::rgb(169, 169, 169)),
    ("darkgrey", ColorValue::rgb(169, 169, 169)),
    ("lightgray", ColorValue::rgb(211, 211, 211)),
    ("lightgrey", ColorValue::rgb(211, 211, 211)),
    ("silver", ColorValue::rgb(192, 192, 192)),
    ("maroon", ColorValue::rgb(128, 0, 0)),
    ("olive", ColorValue::rgb(128, 128, 0)),
    ("lime", ColorValue::rgb(0, 255, 0)),
    ("navy", ColorValue::rgb(0, 0, 128)),
    ("purple", ColorValue::rgb(128, 0, 128)),
    ("teal", ColorValue::rgb(0, 128, 128)),
    ("orange", ColorValue::rgb(255, 165, 0)),
    ("pink", ColorValue::rgb(255, 192, 203)),
    ("brown", ColorValue::rgb(165, 42, 42)),
    ("gold", ColorValue::rgb(255, 215, 0)),
    ("coral", ColorValue::rgb(255, 127, 80)),
    ("crimson", ColorValue::rgb(220, 20, 60)),
    ("darkblue", ColorValue::rgb(0, 0, 139)),
    ("darkgreen", ColorValue::rgb(0, 100, 0)),
    ("darkred", ColorValue::rgb(139, 0, 0)),
    ("indigo", ColorValue::rgb(75, 0, 130)),
    ("violet", ColorValue::rgb(238, 130, 238)),
    ("transparent", ColorValue::rgba(0, 0, 0, 0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_out_of_range_fail() {
        assert!(ColorValue::from_components(&[256, 0, 0]).is_none());
        assert!(ColorValue::from_components(&[0, -1, 0]).is_none());
        assert!(ColorValue::from_components(&[0, 0]).is_none());
        assert!(ColorValue::from_components(&[0, 0, 0, 0, 0]).is_none());
    }

    #[test]
    fn components_build_colors() {
        assert_eq!(
            ColorValue::from_components(&[0, 255, 0]),
            Some(ColorValue::rgb(0, 255, 0))
        );
        assert_eq!(
            ColorValue::from_components(&[1, 2, 3, 4]),
            Some(ColorValue::rgba(1, 2, 3, 4))
        );
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorValue::named("Gray"), Some(ColorValue::rgb(128, 128, 128)));
        assert_eq!(ColorValue::named("pink"), Some(ColorValue::rgb(255, 192, 203)));
        assert_eq!(ColorValue::named("green"), Some(ColorValue::rgb(0, 128, 0)));
        assert_eq!(ColorValue::named("nope"), None);
    }

    #[test]
    fn hex_forms() {
        assert_eq!(ColorValue::from_hex("f00"), Some(ColorValue::RED));
        assert_eq!(ColorValue::from_hex("00ff00"), Some(ColorValue::rgb(0, 255, 0)));
        assert_eq!(ColorValue::from_hex("00000080"), Some(ColorValue::rgba(0, 0, 0, 128)));
        assert_eq!(ColorValue::from_hex("zz0000"), None);
        assert_eq!(ColorValue::rgb(255, 192, 203).to_hex(), "#ffc0cb");
    }

    #[test]
    fn display_uses_function_form() {
        assert_eq!(ColorValue::rgb(0, 255, 0).to_string(), "rgb(0,255,0)");
        assert_eq!(ColorValue::rgba(1, 2, 3, 4).to_string(), "rgba(1,2,3,4)");
    }
}
