//! Style keys for the chart dialect.
//!
//! A [`StyleKey`] names one settable visual property of a chart element.
//! Keys are defined once as constants; equality is name-based, so two keys
//! with the same name are the same key.

use std::fmt;

/// Identifier of a single style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey {
    name: &'static str,
}

impl StyleKey {
    /// Define a style key.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The key's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Whether an axis maps the domain or the range.
pub const AXIS_DIMENSION: StyleKey = StyleKey::new("axis-dimension");
/// Whether an axis is the primary or secondary one for its dimension.
pub const AXIS_POSITION: StyleKey = StyleKey::new("axis-position");
/// Ordering of an axis among axes sharing a dimension and position.
pub const AXIS_ORDER: StyleKey = StyleKey::new("axis-order");
/// Which axis a series is plotted against.
pub const AXIS_LOCATION: StyleKey = StyleKey::new("axis-location");
/// Start and end colors of a gradient fill.
pub const GRADIENT_COLOR: StyleKey = StyleKey::new("gradient-color");
/// Fill color for bars with negative values.
pub const NEGATIVE_BAR_COLOR: StyleKey = StyleKey::new("negative-bar-color");
/// Height of series markers.
pub const MARKER_HEIGHT: StyleKey = StyleKey::new("marker-height");
/// Rendering style of the chart area.
pub const CHART_AREA_STYLE: StyleKey = StyleKey::new("chart-area-style");
/// Foreground color.
pub const CHART_COLOR: StyleKey = StyleKey::new("color");

/// Every key defined by the chart dialect.
pub const ALL: &[StyleKey] = &[
    AXIS_DIMENSION,
    AXIS_POSITION,
    AXIS_ORDER,
    AXIS_LOCATION,
    GRADIENT_COLOR,
    NEGATIVE_BAR_COLOR,
    MARKER_HEIGHT,
    CHART_AREA_STYLE,
    CHART_COLOR,
];
