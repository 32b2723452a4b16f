//! The chart model and its text parts.

use std::fmt;

use chartkit_style::parser::parse_declarations;
use chartkit_style::registry::StyleRegistry;
use chartkit_style::style::StyleDeclarations;

use super::plot::Plot;

/// Inline declaration text in the chart style dialect.
///
/// The text is kept verbatim so that it survives serialization unchanged;
/// [`CssStyle::declarations`] parses it on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyle {
    text: String,
}

impl CssStyle {
    /// Wrap declaration text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The declaration text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Parse the declarations with `registry`. Unknown or malformed
    /// properties are skipped.
    pub fn declarations(&self, registry: &StyleRegistry) -> StyleDeclarations {
        parse_declarations(&self.text, registry)
    }
}

impl From<&str> for CssStyle {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CssStyle {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for CssStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Text with an optional style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: CssStyle,
}

impl StyledText {
    /// Unstyled text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CssStyle::default(),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.style = style.into();
        self
    }
}

/// Where the chart title is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TitleLocation {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TitleLocation {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Look up a location by wire name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Top, Self::Bottom, Self::Left, Self::Right]
            .into_iter()
            .find(|location| location.as_str().eq_ignore_ascii_case(name))
    }
}

/// The chart title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartTitle {
    pub text: StyledText,
    pub location: TitleLocation,
}

impl ChartTitle {
    /// A title at the default location.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: StyledText::new(text),
            location: TitleLocation::default(),
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: TitleLocation) -> Self {
        self.location = location;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.text.style = style.into();
        self
    }
}

/// The chart legend.
///
/// Visibility is a presentation toggle and is not written by the serializer;
/// deserialized legends are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLegend {
    pub style: CssStyle,
    pub visible: bool,
}

impl ChartLegend {
    /// A visible legend.
    pub fn new() -> Self {
        Self {
            style: CssStyle::default(),
            visible: true,
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.style = style.into();
        self
    }
}

impl Default for ChartLegend {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete chart description.
///
/// # Example
///
/// ```
/// use chartkit_model::model::{ChartModel, ChartTitle, Plot, TwoAxisPlot, BarFlavor};
///
/// let model = ChartModel::new()
///     .with_title(ChartTitle::new("Revenue"))
///     .with_plot(Plot::bar(TwoAxisPlot::new(), BarFlavor::Stacked));
///
/// assert_eq!(model.title.as_ref().map(|t| t.text.text.as_str()), Some("Revenue"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    pub id: Option<String>,
    pub chart_engine_id: u32,
    pub style: CssStyle,
    pub title: Option<ChartTitle>,
    pub subtitles: Vec<StyledText>,
    pub legend: Option<ChartLegend>,
    pub plot: Option<Plot>,
}

impl ChartModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the rendering engine identifier.
    pub fn with_chart_engine_id(mut self, id: u32) -> Self {
        self.chart_engine_id = id;
        self
    }

    /// Set the chart-level style.
    pub fn with_style(mut self, style: impl Into<CssStyle>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: ChartTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Add a subtitle.
    pub fn with_subtitle(mut self, subtitle: StyledText) -> Self {
        self.subtitles.push(subtitle);
        self
    }

    /// Set the legend.
    pub fn with_legend(mut self, legend: ChartLegend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Set the plot.
    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plot = Some(plot);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit_style::keys;
    use chartkit_style::types::ColorValue;

    #[test]
    fn css_style_parses_on_demand() {
        let style = CssStyle::new("color: red; -x-chart-marker-height: 4px; bogus: 1");
        let declarations = style.declarations(&StyleRegistry::chart());
        assert_eq!(declarations.len(), 2);
        assert_eq!(
            declarations.get(&keys::CHART_COLOR),
            Some(&ColorValue::RED.into())
        );
        assert_eq!(style.text(), "color: red; -x-chart-marker-height: 4px; bogus: 1");
    }

    #[test]
    fn title_location_names() {
        assert_eq!(TitleLocation::from_name("BOTTOM"), Some(TitleLocation::Bottom));
        assert_eq!(TitleLocation::from_name("middle"), None);
        assert_eq!(TitleLocation::Left.as_str(), "left");
    }

    #[test]
    fn legend_defaults_visible() {
        assert!(ChartLegend::default().visible);
        assert!(CssStyle::new("  ").is_empty());
    }
}
