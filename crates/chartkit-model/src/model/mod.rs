//! Chart model types.
//!
//! A [`ChartModel`] describes one chart: its titles, legend and a single
//! [`Plot`]. Visual properties are carried as inline [`CssStyle`] text in the
//! chart style dialect and resolved with `chartkit-style`.

mod chart;
mod data;
mod plot;

pub use chart::{ChartLegend, ChartModel, ChartTitle, CssStyle, StyledText, TitleLocation};
pub use data::ChartDataDefinition;
pub use plot::{
    Axis, BarFlavor, DialPlot, Grid, LineFlavor, Orientation, Palette, PieLabels, PiePlot, Plot,
    PlotKind, Scale, TwoAxisPlot,
};
