//! Round-trips and root checks for serialized chart models.

use chartkit_model::Error;
use chartkit_model::model::{
    Axis, BarFlavor, ChartDataDefinition, ChartLegend, ChartModel, ChartTitle, DialPlot, Grid,
    LineFlavor, Orientation, Palette, PieLabels, PiePlot, Plot, Scale, StyledText,
    TitleLocation, TwoAxisPlot,
};
use chartkit_model::serializer::{
    self, Format, SerializerOptions, deserialize, deserialize_data_definition, serialize,
    serialize_data_definition,
};
use chartkit_style::keys;
use chartkit_style::registry;
use chartkit_style::types::ColorValue;
use chartkit_style::types::constants::axis_location;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn bar_chart() -> ChartModel {
    let plot = TwoAxisPlot::new()
        .with_orientation(Orientation::Horizontal)
        .with_style("-x-chart-gradient-color: gray cyan")
        .with_axes(
            Axis::labeled("Region").with_style("-x-chart-axis-location: secondary"),
            Axis::labeled("Revenue"),
        )
        .with_palette(Palette::new([
            ColorValue::RED,
            ColorValue::rgb(0, 128, 0),
            ColorValue::rgba(0, 0, 255, 128),
        ]));

    ChartModel::new()
        .with_id("sales")
        .with_chart_engine_id(1)
        .with_style("color: #333")
        .with_title(
            ChartTitle::new("Sales & <Costs>")
                .with_location(TitleLocation::Bottom)
                .with_style("color: red"),
        )
        .with_subtitle(StyledText::new("2024"))
        .with_subtitle(StyledText::new("All regions").with_style("color: gray"))
        .with_legend(ChartLegend::new().with_style("color: black"))
        .with_plot(Plot::bar(plot, BarFlavor::Stacked))
}

fn other_charts() -> Vec<ChartModel> {
    let mut dial = DialPlot::new(Scale::new(-10.0, 42.5));
    dial.animate = true;

    let pie = PiePlot {
        animate: true,
        palette: Some(Palette::new([ColorValue::YELLOW])),
        ..PiePlot::new(270)
    };

    vec![
        ChartModel::new(),
        ChartModel::new().with_plot(Plot::line(TwoAxisPlot::new(), LineFlavor::Step)),
        ChartModel::new().with_plot(Plot::Area(TwoAxisPlot::new())),
        ChartModel::new().with_plot(Plot::Scatter(TwoAxisPlot::new())),
        ChartModel::new().with_plot(Plot::Pie(pie)),
        ChartModel::new().with_plot(Plot::Dial(dial)),
    ]
}

#[test]
fn chart_model_round_trips() {
    init_tracing();
    let mut models = vec![bar_chart()];
    models.extend(other_charts());

    for format in [Format::Json, Format::Xml] {
        for model in &models {
            let text = serialize(model, format).unwrap();
            assert_eq!(&deserialize(&text, format).unwrap(), model, "{}: {}", format, text);

            let compact =
                serializer::serialize_with(model, format, &SerializerOptions::compact()).unwrap();
            assert!(!compact.contains('\n'), "{}", compact);
            assert_eq!(&deserialize(&compact, format).unwrap(), model);
        }
    }
}

#[test]
fn xml_wire_form() {
    let xml = serializer::serialize_with(&bar_chart(), Format::Xml, &SerializerOptions::compact())
        .unwrap();

    assert!(xml.starts_with(r#"<chartModel id="sales" chartEngineId="1" style="color: #333">"#));
    assert!(xml.contains(
        r#"<title style="color: red" location="bottom">Sales &amp; &lt;Costs&gt;</title>"#
    ));
    assert!(xml.contains(r#"<barPlot orientation="horizontal""#));
    assert!(xml.contains(r#"flavor="stacked""#));
    assert!(xml.contains("<color>#0000ff80</color>"));
}

#[test]
fn json_wire_form() {
    let json = serialize(&bar_chart(), Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let chart = &value["chartModel"];

    assert_eq!(chart["@id"], "sales");
    assert_eq!(chart["title"]["$"], "Sales & <Costs>");
    assert_eq!(chart["title"]["@location"], "bottom");
    assert_eq!(chart["subtitle"][0], "2024");
    assert_eq!(chart["subtitle"][1]["@style"], "color: gray");
    assert_eq!(chart["barPlot"]["palette"]["color"][1], "#008000");
}

#[test]
fn omitted_fields_never_appear() {
    let mut legend = ChartLegend::new();
    legend.visible = false;
    let pie = PiePlot {
        labels: PieLabels {
            visible: false,
            style: "color: white".into(),
        },
        slices: vec![StyledText::new("North"), StyledText::new("South")],
        ..PiePlot::new(0)
    };
    let mut area = TwoAxisPlot::new();
    area.grid.vertical_lines = false;
    area.grid.style = "color: silver".into();
    let models = [
        bar_chart(),
        ChartModel::new().with_legend(legend).with_plot(Plot::Pie(pie)),
        ChartModel::new().with_plot(Plot::Area(area)),
    ];

    for model in &models {
        for format in [Format::Json, Format::Xml] {
            let text = serialize(model, format).unwrap();
            for field in [
                "visible",
                "slices",
                "North",
                "labels",
                "grid",
                "Lines",
                "silver",
                "horizontalAxis",
                "verticalAxis",
            ] {
                assert!(!text.contains(field), "{} in {}", field, text);
            }
        }
    }

    // Omitted values come back as their defaults.
    let text = serialize(&models[1], Format::Xml).unwrap();
    let restored = deserialize(&text, Format::Xml).unwrap();
    assert!(restored.legend.unwrap().visible);
    let Some(Plot::Pie(pie)) = restored.plot else {
        panic!("expected a pie plot");
    };
    assert_eq!(pie.labels, PieLabels::default());
    assert!(pie.slices.is_empty());

    let text = serialize(&models[2], Format::Json).unwrap();
    let restored = deserialize(&text, Format::Json).unwrap();
    assert_eq!(restored.plot.unwrap().two_axis().unwrap().grid, Grid::default());
}

#[test]
fn disallowed_roots_fail_closed() {
    init_tracing();
    let documents = [
        (Format::Xml, r#"<java.lang.ProcessBuilder><command>calc</command></java.lang.ProcessBuilder>"#),
        (Format::Xml, "<chartDataModel><query>q</query></chartDataModel>"),
        (Format::Json, r#"{"dynamic-proxy": {"interface": "x"}}"#),
        (Format::Json, r#"{"chartDataModel": {"query": "q"}}"#),
    ];
    for (format, input) in documents {
        assert!(
            matches!(deserialize(input, format), Err(Error::DisallowedType { .. })),
            "{}",
            input
        );
    }

    let chart = serialize(&bar_chart(), Format::Json).unwrap();
    assert!(matches!(
        deserialize_data_definition(&chart, Format::Json),
        Err(Error::DisallowedType { name }) if name == "chartModel"
    ));

    assert!(matches!(deserialize("<chartModel>", Format::Xml), Err(_)));
    assert!(matches!(deserialize("not json", Format::Json), Err(Error::Json(_))));
}

#[test]
fn data_definition_round_trips() {
    let definitions = [
        ChartDataDefinition::new("SELECT region, revenue FROM sales")
            .with_domain_column("region")
            .with_range_column("revenue")
            .with_category_column("quarter")
            .with_scaling_factor(0.001),
        ChartDataDefinition::new("q").with_scaling_factor(3.0),
        ChartDataDefinition::default(),
    ];

    for format in [Format::Json, Format::Xml] {
        for definition in &definitions {
            let text = serialize_data_definition(definition, format).unwrap();
            assert_eq!(&deserialize_data_definition(&text, format).unwrap(), definition);
        }
    }

    let xml = r#"<chartDataModel>
        <query>SELECT * FROM t WHERE a &lt; 3</query>
        <scalingFactor> 2.5 </scalingFactor>
    </chartDataModel>"#;
    let definition = deserialize_data_definition(xml, Format::Xml).unwrap();
    assert_eq!(definition.query.as_deref(), Some("SELECT * FROM t WHERE a < 3"));
    assert_eq!(definition.scaling_factor, Some(2.5));
    assert_eq!(definition.domain_column, None);
}

#[test]
fn deserialized_styles_resolve() {
    let text = serialize(&bar_chart(), Format::Xml).unwrap();
    let model = deserialize(&text, Format::Xml).unwrap();
    let registry = registry::global();

    let Some(plot) = model.plot.as_ref().and_then(Plot::two_axis) else {
        panic!("expected a two-axis plot");
    };
    let plot_style = plot.style.declarations(registry);
    assert_eq!(plot_style.len(), 1);
    assert!(plot_style.contains(&keys::GRADIENT_COLOR));

    // Horizontal orientation puts the domain axis on the vertical side.
    let axis = plot.vertical_axis().style.declarations(registry);
    assert_eq!(
        axis.get(&keys::AXIS_LOCATION),
        Some(&axis_location::SECONDARY.into())
    );
}
