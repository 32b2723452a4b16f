//! Mapping between model types and the element tree.

use chartkit_style::types::ColorValue;

use crate::error::{Error, Result};
use crate::model::{
    Axis, BarFlavor, ChartDataDefinition, ChartLegend, ChartModel, ChartTitle, CssStyle,
    DialPlot, Grid, LineFlavor, Orientation, Palette, PieLabels, PiePlot, Plot, PlotKind, Scale,
    StyledText, TitleLocation, TwoAxisPlot,
};

use super::tree::Element;
use super::{CHART_DATA_ROOT, CHART_ROOT, TARGET};

// ============================================================================
// Model -> tree
// ============================================================================

pub fn chart_to_element(model: &ChartModel) -> Element {
    let mut root = Element::new(CHART_ROOT);
    if let Some(id) = &model.id {
        root.set_attribute("id", id.as_str());
    }
    root.set_attribute("chartEngineId", model.chart_engine_id.to_string());
    set_style(&mut root, &model.style);

    if let Some(title) = &model.title {
        let mut element = styled_text("title", &title.text);
        element.set_attribute("location", title.location.as_str());
        root.add_child(element);
    }
    for subtitle in &model.subtitles {
        root.add_child(styled_text("subtitle", subtitle));
    }
    if let Some(legend) = &model.legend {
        let mut element = Element::new("legend");
        set_style(&mut element, &legend.style);
        root.add_child(element);
    }
    if let Some(plot) = &model.plot {
        root.add_child(plot_to_element(plot));
    }
    root
}

pub fn data_definition_to_element(definition: &ChartDataDefinition) -> Element {
    let mut root = Element::new(CHART_DATA_ROOT);
    let columns = [
        ("query", &definition.query),
        ("domainColumn", &definition.domain_column),
        ("rangeColumn", &definition.range_column),
        ("categoryColumn", &definition.category_column),
    ];
    for (name, value) in columns {
        if let Some(value) = value {
            root.add_child_text(name, value.as_str());
        }
    }
    if let Some(factor) = definition.scaling_factor {
        root.add_child_text("scalingFactor", factor.to_string());
    }
    root
}

fn plot_to_element(plot: &Plot) -> Element {
    let mut element = Element::new(plot.kind().element_name());
    match plot {
        Plot::Bar { plot, flavor } => {
            write_two_axis(&mut element, plot);
            element.set_attribute("flavor", flavor.as_str());
        }
        Plot::Line { plot, flavor } => {
            write_two_axis(&mut element, plot);
            element.set_attribute("flavor", flavor.as_str());
        }
        Plot::Area(plot) | Plot::Scatter(plot) => write_two_axis(&mut element, plot),
        Plot::Pie(pie) => {
            element.set_attribute("animate", pie.animate.to_string());
            element.set_attribute("startAngle", pie.start_angle.to_string());
            set_style(&mut element, &pie.style);
            if let Some(palette) = &pie.palette {
                element.add_child(palette_to_element(palette));
            }
        }
        Plot::Dial(dial) => {
            element.set_attribute("animate", dial.animate.to_string());
            set_style(&mut element, &dial.style);
            let mut scale = Element::new("scale");
            scale.set_attribute("min", dial.scale.min.to_string());
            scale.set_attribute("max", dial.scale.max.to_string());
            element.add_child(scale);
        }
    }
    element
}

fn write_two_axis(element: &mut Element, plot: &TwoAxisPlot) {
    element.set_attribute("orientation", plot.orientation.as_str());
    set_style(element, &plot.style);
    element.add_child(axis_to_element("domainAxis", &plot.domain_axis));
    element.add_child(axis_to_element("rangeAxis", &plot.range_axis));
    if let Some(palette) = &plot.palette {
        element.add_child(palette_to_element(palette));
    }
}

fn axis_to_element(name: &str, axis: &Axis) -> Element {
    let mut element = Element::new(name);
    set_style(&mut element, &axis.style);
    if let Some(label) = &axis.label {
        element.add_child(styled_text("label", label));
    }
    element
}

fn palette_to_element(palette: &Palette) -> Element {
    let mut element = Element::new("palette");
    for color in &palette.colors {
        element.add_child_text("color", color.to_hex());
    }
    element
}

fn styled_text(name: &str, text: &StyledText) -> Element {
    let mut element = Element::text_element(name, text.text.as_str());
    set_style(&mut element, &text.style);
    element
}

fn set_style(element: &mut Element, style: &CssStyle) {
    element.set_attribute_nonempty("style", style.text());
}

// ============================================================================
// Tree -> model
// ============================================================================

pub fn chart_from_element(root: &Element) -> Result<ChartModel> {
    let mut model = ChartModel {
        id: root.attribute("id").map(str::to_string),
        chart_engine_id: root
            .parse_attribute("chartEngineId", |v| v.parse().ok())?
            .unwrap_or_default(),
        style: style_of(root),
        ..ChartModel::default()
    };

    for child in root.children() {
        match child.name() {
            "title" => {
                let location = child
                    .parse_attribute("location", TitleLocation::from_name)?
                    .unwrap_or_default();
                model.title = Some(ChartTitle {
                    text: styled_text_of(child),
                    location,
                });
            }
            "subtitle" => model.subtitles.push(styled_text_of(child)),
            "legend" => {
                model.legend = Some(ChartLegend::new().with_style(style_of(child)));
            }
            name => match PlotKind::from_element_name(name) {
                Some(kind) if model.plot.is_none() => model.plot = Some(plot_from_element(kind, child)?),
                Some(_) => return Err(Error::malformed("chart has more than one plot")),
                None => {
                    tracing::debug!(target: TARGET, element = name, "skipping unknown element");
                }
            },
        }
    }
    Ok(model)
}

pub fn data_definition_from_element(root: &Element) -> Result<ChartDataDefinition> {
    let text = |name: &str| root.child_text(name).map(str::to_string);
    let scaling_factor = match root.child_text("scalingFactor") {
        None => None,
        Some(value) => Some(value.trim().parse::<f64>().map_err(|_| {
            Error::malformed(format!("invalid scaling factor '{}'", value))
        })?),
    };

    Ok(ChartDataDefinition {
        query: text("query"),
        domain_column: text("domainColumn"),
        range_column: text("rangeColumn"),
        category_column: text("categoryColumn"),
        scaling_factor,
    })
}

fn plot_from_element(kind: PlotKind, element: &Element) -> Result<Plot> {
    let plot = match kind {
        PlotKind::Bar => Plot::Bar {
            plot: two_axis_from_element(element)?,
            flavor: element
                .parse_attribute("flavor", BarFlavor::from_name)?
                .unwrap_or_default(),
        },
        PlotKind::Line => Plot::Line {
            plot: two_axis_from_element(element)?,
            flavor: element
                .parse_attribute("flavor", LineFlavor::from_name)?
                .unwrap_or_default(),
        },
        PlotKind::Area => Plot::Area(two_axis_from_element(element)?),
        PlotKind::Scatter => Plot::Scatter(two_axis_from_element(element)?),
        PlotKind::Pie => Plot::Pie(PiePlot {
            animate: parse_flag(element, "animate")?.unwrap_or_default(),
            start_angle: element
                .parse_attribute("startAngle", |v| v.parse().ok())?
                .unwrap_or_default(),
            style: style_of(element),
            palette: element.child("palette").map(palette_from_element).transpose()?,
            labels: PieLabels::default(),
            slices: Vec::new(),
        }),
        PlotKind::Dial => {
            let scale = match element.child("scale") {
                Some(scale) => Scale::new(
                    parse_number(scale, "min")?.unwrap_or(Scale::default().min),
                    parse_number(scale, "max")?.unwrap_or(Scale::default().max),
                ),
                None => Scale::default(),
            };
            Plot::Dial(DialPlot {
                animate: parse_flag(element, "animate")?.unwrap_or_default(),
                style: style_of(element),
                scale,
            })
        }
    };
    Ok(plot)
}

fn two_axis_from_element(element: &Element) -> Result<TwoAxisPlot> {
    Ok(TwoAxisPlot {
        orientation: element
            .parse_attribute("orientation", Orientation::from_name)?
            .unwrap_or_default(),
        style: style_of(element),
        domain_axis: element.child("domainAxis").map(axis_of).unwrap_or_default(),
        range_axis: element.child("rangeAxis").map(axis_of).unwrap_or_default(),
        grid: Grid::default(),
        palette: element.child("palette").map(palette_from_element).transpose()?,
    })
}

fn axis_of(element: &Element) -> Axis {
    Axis {
        label: element.child("label").map(styled_text_of),
        style: style_of(element),
    }
}

fn palette_from_element(element: &Element) -> Result<Palette> {
    let colors = element
        .children_by_name("color")
        .map(|color| {
            let text = color.text().trim();
            ColorValue::from_hex(text.trim_start_matches('#'))
                .ok_or_else(|| Error::malformed(format!("invalid palette color '{}'", text)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Palette { colors })
}

fn styled_text_of(element: &Element) -> StyledText {
    StyledText {
        text: element.text().to_string(),
        style: style_of(element),
    }
}

fn style_of(element: &Element) -> CssStyle {
    element.attribute("style").map(CssStyle::new).unwrap_or_default()
}

fn parse_flag(element: &Element, name: &str) -> Result<Option<bool>> {
    element.parse_attribute(name, |v| v.trim().parse().ok())
}

fn parse_number(element: &Element, name: &str) -> Result<Option<f64>> {
    element.parse_attribute(name, |v| v.trim().parse().ok())
}
