//! Chart models and their serialized forms.
//!
//! - [`model`]: the chart description (titles, legend, plots) and its data
//!   binding, with inline styles in the `chartkit-style` dialect
//! - [`serializer`]: XML and mapped JSON encodings with an allow-list of
//!   root types checked before anything is constructed

pub mod model;
pub mod serializer;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::model::{
        Axis, BarFlavor, ChartDataDefinition, ChartLegend, ChartModel, ChartTitle, CssStyle,
        DialPlot, Grid, LineFlavor, Orientation, Palette, PiePlot, Plot, Scale, StyledText,
        TitleLocation, TwoAxisPlot,
    };
    pub use crate::serializer::{Format, SerializerOptions, deserialize, serialize};
}
