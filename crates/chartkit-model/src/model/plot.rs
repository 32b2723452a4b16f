//! Plot kinds and their parts.

use chartkit_style::types::ColorValue;

use super::chart::{CssStyle, StyledText};

/// Direction in which the domain axis runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Look up an orientation by wire name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Vertical, Self::Horizontal]
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(name))
    }
}

/// Rendering variant of a bar plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BarFlavor {
    #[default]
    Plain,
    Stacked,
    Stacked100Percent,
    ThreeD,
    Cylinder,
    Layered,
}

impl BarFlavor {
    const ALL: [Self; 6] = [
        Self::Plain,
        Self::Stacked,
        Self::Stacked100Percent,
        Self::ThreeD,
        Self::Cylinder,
        Self::Layered,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Stacked => "stacked",
            Self::Stacked100Percent => "stacked-100-percent",
            Self::ThreeD => "3d",
            Self::Cylinder => "cylinder",
            Self::Layered => "layered",
        }
    }

    /// Look up a flavor by wire name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
    }
}

/// Rendering variant of a line plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineFlavor {
    #[default]
    Plain,
    ThreeD,
    Step,
}

impl LineFlavor {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::ThreeD => "3d",
            Self::Step => "step",
        }
    }

    /// Look up a flavor by wire name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Plain, Self::ThreeD, Self::Step]
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
    }
}

/// An axis of a two-axis plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Axis {
    pub label: Option<StyledText>,
    pub style: CssStyle,
}

impl Axis {
    /// An axis with a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(StyledText::new(label)),
            style: CssStyle::default(),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.style = style.into();
        self
    }
}

/// Grid lines behind a two-axis plot.
///
/// Render-time state; serialized models always come back with the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub style: CssStyle,
    pub horizontal_lines: bool,
    pub vertical_lines: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            style: CssStyle::default(),
            horizontal_lines: true,
            vertical_lines: true,
        }
    }
}

/// Ordered series colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    pub colors: Vec<ColorValue>,
}

impl Palette {
    /// A palette of `colors`.
    pub fn new(colors: impl IntoIterator<Item = ColorValue>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Color for the series at `index`, cycling through the palette.
    pub fn color_for(&self, index: usize) -> Option<ColorValue> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors[index % self.colors.len()])
        }
    }
}

/// Value range of a dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    /// A scale from `min` to `max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Shared part of bar, line, area and scatter plots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoAxisPlot {
    pub orientation: Orientation,
    pub style: CssStyle,
    pub domain_axis: Axis,
    pub range_axis: Axis,
    pub grid: Grid,
    pub palette: Option<Palette>,
}

impl TwoAxisPlot {
    /// A vertical plot with unlabeled axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set both axes.
    pub fn with_axes(mut self, domain: Axis, range: Axis) -> Self {
        self.domain_axis = domain;
        self.range_axis = range;
        self
    }

    /// Set the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.style = style.into();
        self
    }

    /// The axis drawn horizontally for the current orientation.
    pub fn horizontal_axis(&self) -> &Axis {
        match self.orientation {
            Orientation::Vertical => &self.domain_axis,
            Orientation::Horizontal => &self.range_axis,
        }
    }

    /// The axis drawn vertically for the current orientation.
    pub fn vertical_axis(&self) -> &Axis {
        match self.orientation {
            Orientation::Vertical => &self.range_axis,
            Orientation::Horizontal => &self.domain_axis,
        }
    }
}

/// Label settings of a pie plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieLabels {
    pub visible: bool,
    pub style: CssStyle,
}

impl Default for PieLabels {
    fn default() -> Self {
        Self {
            visible: true,
            style: CssStyle::default(),
        }
    }
}

/// A pie plot.
///
/// `slices` is filled in from data at render time. Neither `slices` nor
/// `labels` is serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiePlot {
    pub animate: bool,
    pub start_angle: i32,
    pub style: CssStyle,
    pub palette: Option<Palette>,
    pub labels: PieLabels,
    pub slices: Vec<StyledText>,
}

impl PiePlot {
    /// A pie plot starting at `start_angle` degrees.
    pub fn new(start_angle: i32) -> Self {
        Self {
            start_angle,
            ..Self::default()
        }
    }
}

/// A dial (gauge) plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialPlot {
    pub animate: bool,
    pub style: CssStyle,
    pub scale: Scale,
}

impl DialPlot {
    /// A dial over `scale`.
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

/// Plot discriminant, used for wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Bar,
    Line,
    Area,
    Scatter,
    Pie,
    Dial,
}

impl PlotKind {
    /// Every plot kind.
    pub const ALL: [Self; 6] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Scatter,
        Self::Pie,
        Self::Dial,
    ];

    /// Element name of the plot in serialized documents.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Bar => "barPlot",
            Self::Line => "linePlot",
            Self::Area => "areaPlot",
            Self::Scatter => "scatterPlot",
            Self::Pie => "piePlot",
            Self::Dial => "dialPlot",
        }
    }

    /// Look up a kind by element name.
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.element_name() == name)
    }
}

/// The plot of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    Bar { plot: TwoAxisPlot, flavor: BarFlavor },
    Line { plot: TwoAxisPlot, flavor: LineFlavor },
    Area(TwoAxisPlot),
    Scatter(TwoAxisPlot),
    Pie(PiePlot),
    Dial(DialPlot),
}

impl Plot {
    /// A bar plot.
    pub fn bar(plot: TwoAxisPlot, flavor: BarFlavor) -> Self {
        Self::Bar { plot, flavor }
    }

    /// A line plot.
    pub fn line(plot: TwoAxisPlot, flavor: LineFlavor) -> Self {
        Self::Line { plot, flavor }
    }

    /// The plot's kind.
    pub fn kind(&self) -> PlotKind {
        match self {
            Self::Bar { .. } => PlotKind::Bar,
            Self::Line { .. } => PlotKind::Line,
            Self::Area(_) => PlotKind::Area,
            Self::Scatter(_) => PlotKind::Scatter,
            Self::Pie(_) => PlotKind::Pie,
            Self::Dial(_) => PlotKind::Dial,
        }
    }

    /// The two-axis part, for bar, line, area and scatter plots.
    pub fn two_axis(&self) -> Option<&TwoAxisPlot> {
        match self {
            Self::Bar { plot, .. } | Self::Line { plot, .. } => Some(plot),
            Self::Area(plot) | Self::Scatter(plot) => Some(plot),
            Self::Pie(_) | Self::Dial(_) => None,
        }
    }

    /// The plot's own style.
    pub fn style(&self) -> &CssStyle {
        match self {
            Self::Pie(pie) => &pie.style,
            Self::Dial(dial) => &dial.style,
            Self::Bar { plot, .. } | Self::Line { plot, .. } => &plot.style,
            Self::Area(plot) | Self::Scatter(plot) => &plot.style,
        }
    }
}
