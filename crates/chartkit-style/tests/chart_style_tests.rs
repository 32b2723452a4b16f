//! End-to-end styling of chart documents.

use std::sync::Arc;
use std::thread;

use chartkit_style::document::{ChartDocument, ChartElement, ElementId};
use chartkit_style::handlers::{CompoundOutcome, CompoundReadHandler, ReadHandler};
use chartkit_style::keys;
use chartkit_style::parser::{
    ParseOptions, TokenStream, parse_declarations, parse_declarations_with, tokenize,
};
use chartkit_style::registry::{self, StyleRegistry};
use chartkit_style::resolve::StyleResolver;
use chartkit_style::rules::{StylePriority, StyleSheet};
use chartkit_style::types::constants::{axis_dimension, axis_location, axis_position};
use chartkit_style::types::{ColorValue, NumericValue, StyleValue, ValuePair};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A bar chart whose series each carry an inline style.
fn series_document(styles: &[&str]) -> (ChartDocument, Vec<ElementId>) {
    let mut document = ChartDocument::new(ChartElement::new("Chart"));
    let plot = document
        .append_child(document.root(), ChartElement::new("Plot").with_class("bar"))
        .unwrap();
    let series = styles
        .iter()
        .map(|style| {
            document
                .append_child(plot, ChartElement::new("Series").with_style(*style))
                .unwrap()
        })
        .collect();
    (document, series)
}

#[test]
fn axis_location_across_series() {
    init_tracing();
    let (document, _) = series_document(&[
        "-x-chart-axis-location: primary",
        "-x-chart-axis-location: secondary",
        "-x-chart-axis-location: primary",
        "-x-chart-axis-location: PRIMARY",
    ]);

    let styles = StyleResolver::global().resolve(&document);

    // Walk the series in document order through sibling navigation.
    let plot = document.first_child(document.root()).unwrap();
    let mut locations = vec![];
    let mut current = document.first_child(plot);
    while let Some(series) = current {
        locations.push(styles.get(series).unwrap().axis_location());
        current = document.next_sibling(series);
    }

    assert_eq!(
        locations,
        vec![
            Some(axis_location::PRIMARY),
            Some(axis_location::SECONDARY),
            Some(axis_location::PRIMARY),
            Some(axis_location::PRIMARY),
        ]
    );
}

#[test]
fn gradient_colors_resolve_to_ordered_pairs() {
    init_tracing();
    let cases = [
        ("rgb(0,255,0) rgb(255,0,0)", ColorValue::rgb(0, 255, 0), ColorValue::RED),
        ("gray cyan", ColorValue::GRAY, ColorValue::CYAN),
        ("rgb(255,255,0) rgb(0,0,255)", ColorValue::YELLOW, ColorValue::BLUE),
        ("yellow blue", ColorValue::YELLOW, ColorValue::BLUE),
        ("red white", ColorValue::RED, ColorValue::WHITE),
        ("black white", ColorValue::BLACK, ColorValue::WHITE),
        ("rgb(0,255,0) yellow", ColorValue::rgb(0, 255, 0), ColorValue::YELLOW),
        ("rgb(0,255,0) rgb(0,0,255)", ColorValue::rgb(0, 255, 0), ColorValue::BLUE),
        ("yellow rgb(0,0,255)", ColorValue::YELLOW, ColorValue::BLUE),
    ];

    let styles: Vec<String> = cases
        .iter()
        .map(|(value, _, _)| format!("-x-chart-gradient-color: {}", value))
        .collect();
    let style_refs: Vec<&str> = styles.iter().map(String::as_str).collect();
    let (document, series) = series_document(&style_refs);

    let resolved = StyleResolver::global().resolve(&document);
    for ((text, first, second), id) in cases.iter().zip(series) {
        let style = resolved.get(id).unwrap();
        assert_eq!(style.gradient_color(), Some((*first, *second)), "{}", text);
    }

    let first = resolved
        .get(document.elements_by_tag("Series")[0])
        .unwrap()
        .value(&keys::GRADIENT_COLOR)
        .unwrap();
    assert_eq!(first.to_string(), "rgb(0,255,0) rgb(255,0,0)");
}

#[test]
fn swapped_pairs_are_distinct() {
    let forward = ValuePair::new(ColorValue::GRAY.into(), ColorValue::CYAN.into());
    let backward = ValuePair::new(ColorValue::CYAN.into(), ColorValue::GRAY.into());
    assert_ne!(forward, backward);
}

#[test]
fn negative_bar_colors() {
    init_tracing();
    let css = r#"
        Plot.bar > Series { -x-chart-negative-bar-color: green; }
        Series.pink { -x-chart-negative-bar-color: rgb(255, 192, 203); }
        #last { -x-chart-negative-bar-color: blue; }
    "#;
    let registry = registry::global();
    let sheet = StyleSheet::from_css(css, StylePriority::Document, registry);

    let mut document = ChartDocument::new(ChartElement::new("Chart"));
    let plot = document
        .append_child(document.root(), ChartElement::new("Plot").with_class("bar"))
        .unwrap();
    let ids: Vec<_> = [
        ChartElement::new("Series"),
        ChartElement::new("Series").with_class("pink"),
        ChartElement::new("Series").with_class("pink").with_id("last"),
    ]
    .into_iter()
    .map(|element| document.append_child(plot, element).unwrap())
    .collect();
    document.add_stylesheet(sheet);

    let styles = StyleResolver::new(registry).resolve(&document);
    let colors: Vec<_> = ids
        .iter()
        .map(|&id| styles.get(id).unwrap().negative_bar_color())
        .collect();

    assert_eq!(
        colors,
        vec![
            Some(ColorValue::rgb(0, 128, 0)),
            Some(ColorValue::rgb(255, 192, 203)),
            Some(ColorValue::rgb(0, 0, 255)),
        ]
    );
}

#[test]
fn axis_type_rules() {
    let css = r#"
        Axis { -x-chart-axis-type: domain primary 1; }
        Axis.value { -x-chart-axis-type: range secondary 2; }
        Axis.broken { -x-chart-axis-type: range 2 secondary; }
    "#;
    let registry = StyleRegistry::chart();
    let mut resolver = StyleResolver::new(&registry);
    resolver.add_stylesheet(StyleSheet::from_css(css, StylePriority::Document, &registry));

    let mut document = ChartDocument::new(ChartElement::new("Chart"));
    let root = document.root();
    let domain = document.append_child(root, ChartElement::new("Axis")).unwrap();
    let range = document
        .append_child(root, ChartElement::new("Axis").with_class("value"))
        .unwrap();
    let broken = document
        .append_child(root, ChartElement::new("Axis").with_class("broken"))
        .unwrap();

    let styles = resolver.resolve(&document);

    let domain = styles.get(domain).unwrap();
    assert_eq!(domain.axis_dimension(), Some(&axis_dimension::DOMAIN.into()));
    assert_eq!(domain.axis_position(), Some(axis_position::PRIMARY));
    assert_eq!(domain.axis_order(), Some(&NumericValue::number(1.0)));

    let range = styles.get(range).unwrap();
    assert_eq!(range.axis_dimension(), Some(&axis_dimension::RANGE.into()));
    assert_eq!(range.axis_position(), Some(axis_position::SECONDARY));
    assert_eq!(range.axis_order(), Some(&NumericValue::number(2.0)));

    // The malformed rule contributes nothing; the type rule still applies.
    let broken = styles.get(broken).unwrap();
    assert_eq!(broken.axis_position(), Some(axis_position::PRIMARY));
    assert_eq!(broken.len(), 3);
}

#[test]
fn compound_reads_are_atomic_and_repeatable() {
    init_tracing();
    let handler = CompoundReadHandler::axis_type();

    for text in ["domain primary", "primary domain 1", "domain primary first", ""] {
        let units = tokenize(text).unwrap();
        let mut stream = TokenStream::new(&units);
        assert!(handler.create_values(&mut stream).is_none(), "{}", text);
        assert_eq!(stream.position(), 0, "{}", text);
    }

    let units = tokenize("domain primary 1").unwrap();
    let stream = TokenStream::new(&units);
    let first = handler.create_values(&mut stream.clone()).unwrap();
    let second = handler.create_values(&mut stream.clone()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    let units = tokenize("range").unwrap();
    assert_eq!(
        handler.diagnose(&mut TokenStream::new(&units)),
        CompoundOutcome::Malformed {
            key: keys::AXIS_POSITION,
            position: 1
        }
    );

    // Reporting mode logs but never changes the outcome.
    let quiet = parse_declarations("-x-chart-axis-type: domain 1", registry::global());
    let loud = parse_declarations_with(
        "-x-chart-axis-type: domain 1",
        registry::global(),
        &ParseOptions::reporting(),
    );
    assert!(quiet.is_empty());
    assert_eq!(quiet, loud);
}

#[test]
fn value_handlers_through_registry() {
    let registry = registry::global();
    let entry = registry.lookup("-x-chart-axis-dimension").unwrap();
    let units = tokenize("domain range").unwrap();
    let values = entry.handler().parse(&mut TokenStream::new(&units)).unwrap();
    assert_eq!(
        values[&keys::AXIS_DIMENSION],
        StyleValue::List(vec![
            axis_dimension::DOMAIN.into(),
            axis_dimension::RANGE.into()
        ])
    );

    let entry = registry.lookup("-x-chart-marker-height").unwrap();
    let units = tokenize("12px").unwrap();
    let values = entry.handler().parse(&mut TokenStream::new(&units)).unwrap();
    assert_eq!(values[&keys::MARKER_HEIGHT], NumericValue::px(12.0).into());

    let handler = chartkit_style::handlers::ColorReadHandler::new();
    let units = tokenize("rgb(300,0,0)").unwrap();
    assert!(
        handler
            .create_value(&keys::CHART_COLOR, &mut TokenStream::new(&units))
            .is_none()
    );
}

#[test]
fn concurrent_parsing_shares_registry() {
    let registry = Arc::new(StyleRegistry::chart());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let text = format!(
                    "-x-chart-axis-type: {} primary {}; -x-chart-marker-height: {}px",
                    if i % 2 == 0 { "domain" } else { "range" },
                    i,
                    i
                );
                parse_declarations(&text, &registry)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let declarations = handle.join().unwrap();
        assert_eq!(declarations.len(), 4);
        assert_eq!(
            declarations.get(&keys::AXIS_ORDER),
            Some(&NumericValue::number(i as f32).into())
        );
    }
}

#[test]
fn shared_resolver_across_threads() {
    let (document, series) = series_document(&["color: red", "color: #00f"]);
    let document = Arc::new(document);
    let resolver = Arc::new(StyleResolver::global());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let document = Arc::clone(&document);
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.resolve(&document))
        })
        .collect();

    for handle in handles {
        let styles = handle.join().unwrap();
        assert_eq!(styles.get(series[0]).unwrap().color(), Some(ColorValue::RED));
        assert_eq!(styles.get(series[1]).unwrap().color(), Some(ColorValue::BLUE));
    }
}
