//! Document style resolution.

use parking_lot::Mutex;
use slotmap::SecondaryMap;

use crate::document::{ChartDocument, ElementId};
use crate::logging::targets;
use crate::parser::{ParseOptions, parse_declarations_with};
use crate::registry::{self, StyleRegistry};
use crate::rules::StyleSheet;
use crate::style::{LayoutStyle, StyleDeclarations};

use super::cache::DeclarationCache;
use super::cascade::{cascade, matching_rules};

/// Computes the [`LayoutStyle`] of every element of a chart document.
///
/// An element's style is built from the rules of every matching stylesheet
/// (the resolver's own and the document's), applied in ascending priority,
/// specificity and source order, followed by the element's inline `style`
/// declarations. Values are not inherited from parents.
///
/// Resolution takes `&self`; the resolver can be shared between threads.
///
/// # Example
///
/// ```
/// use chartkit_style::document::{ChartDocument, ChartElement};
/// use chartkit_style::resolve::StyleResolver;
/// use chartkit_style::types::constants::axis_location;
///
/// let mut document = ChartDocument::new(ChartElement::new("Chart"));
/// let series = document
///     .append_child(
///         document.root(),
///         ChartElement::new("Series").with_style("-x-chart-axis-location: secondary"),
///     )
///     .unwrap();
///
/// let styles = StyleResolver::global().resolve(&document);
/// assert_eq!(
///     styles.get(series).and_then(|s| s.axis_location()),
///     Some(axis_location::SECONDARY)
/// );
/// ```
pub struct StyleResolver<'r> {
    registry: &'r StyleRegistry,
    stylesheets: Vec<StyleSheet>,
    options: ParseOptions,
    cache: Mutex<DeclarationCache>,
}

impl StyleResolver<'static> {
    /// A resolver for the standard chart dialect.
    pub fn global() -> Self {
        Self::new(registry::global())
    }
}

impl<'r> StyleResolver<'r> {
    /// Create a resolver that parses inline styles with `registry`.
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self {
            registry,
            stylesheets: vec![],
            options: ParseOptions::default(),
            cache: Mutex::new(DeclarationCache::new()),
        }
    }

    /// Set the options used when parsing inline styles.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self.cache.get_mut().clear();
        self
    }

    /// The registry used for inline styles.
    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    /// Add a stylesheet applied to every resolved document.
    pub fn add_stylesheet(&mut self, stylesheet: StyleSheet) {
        self.stylesheets.push(stylesheet);
    }

    /// Remove all resolver stylesheets.
    pub fn clear_stylesheets(&mut self) {
        self.stylesheets.clear();
    }

    /// Get the number of resolver stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    /// Number of distinct inline style texts parsed so far.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().len()
    }

    /// Resolve every element of the document.
    pub fn resolve(&self, document: &ChartDocument) -> DocumentStyles {
        let _span = tracing::debug_span!(target: targets::RESOLVE, "resolve_document").entered();

        let order = document.traverse();
        let mut styles = SecondaryMap::with_capacity(order.len());
        for &id in &order {
            if let Some(style) = self.resolve_element(document, id) {
                styles.insert(id, style);
            }
        }

        tracing::debug!(target: targets::RESOLVE, elements = order.len(), "document resolved");
        DocumentStyles { styles, order }
    }

    /// Resolve a single element. Returns `None` if the element is not in
    /// the document.
    pub fn resolve_element(&self, document: &ChartDocument, id: ElementId) -> Option<LayoutStyle> {
        let element = document.element(id)?;

        let sheets: Vec<&StyleSheet> = self
            .stylesheets
            .iter()
            .chain(document.stylesheets())
            .collect();
        let rules = matching_rules(&sheets, document, id);

        let inline = element.style().map(|text| self.inline_declarations(text));
        let style = cascade(&rules, inline.as_ref());

        tracing::trace!(
            target: targets::RESOLVE,
            element = %element,
            rules = rules.len(),
            values = style.len(),
            "element resolved"
        );
        Some(style)
    }

    fn inline_declarations(&self, text: &str) -> StyleDeclarations {
        if let Some(cached) = self.cache.lock().get(text) {
            return cached.clone();
        }

        let declarations = parse_declarations_with(text, self.registry, &self.options);
        self.cache.lock().insert(text, declarations.clone());
        declarations
    }
}

/// Resolved styles of a document, keyed by element.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
    styles: SecondaryMap<ElementId, LayoutStyle>,
    order: Vec<ElementId>,
}

impl DocumentStyles {
    /// Style of one element.
    pub fn get(&self, id: ElementId) -> Option<&LayoutStyle> {
        self.styles.get(id)
    }

    /// Number of resolved elements.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &LayoutStyle)> {
        self.order
            .iter()
            .filter_map(|&id| self.styles.get(id).map(|style| (id, style)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ChartElement;
    use crate::rules::StylePriority;
    use crate::types::ColorValue;
    use crate::types::constants::axis_location;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn resolver_is_shareable() {
        assert_send_sync::<StyleResolver<'static>>();
    }

    #[test]
    fn rules_then_inline() {
        let registry = StyleRegistry::chart();
        let mut resolver = StyleResolver::new(&registry);
        resolver.add_stylesheet(
            StyleSheet::from_css(
                "Series { -x-chart-axis-location: secondary; color: red }",
                StylePriority::Document,
                &registry,
            ),
        );

        let mut document = ChartDocument::new(ChartElement::new("Chart"));
        let root = document.root();
        let plain = document.append_child(root, ChartElement::new("Series")).unwrap();
        let inline = document
            .append_child(
                root,
                ChartElement::new("Series").with_style("-x-chart-axis-location: primary"),
            )
            .unwrap();

        let styles = resolver.resolve(&document);
        assert_eq!(styles.len(), 3);
        assert!(styles.get(root).is_some_and(LayoutStyle::is_empty));

        let plain = styles.get(plain).unwrap();
        assert_eq!(plain.axis_location(), Some(axis_location::SECONDARY));
        assert_eq!(plain.color(), Some(ColorValue::RED));

        let inline = styles.get(inline).unwrap();
        assert_eq!(inline.axis_location(), Some(axis_location::PRIMARY));
        assert_eq!(inline.color(), Some(ColorValue::RED));
    }

    #[test]
    fn no_inheritance() {
        let mut document = ChartDocument::new(
            ChartElement::new("Chart").with_style("-x-chart-marker-height: 5"),
        );
        let child = document
            .append_child(document.root(), ChartElement::new("Series"))
            .unwrap();

        let styles = StyleResolver::global().resolve(&document);
        assert!(styles.get(document.root()).unwrap().marker_height().is_some());
        assert!(styles.get(child).unwrap().marker_height().is_none());
    }

    #[test]
    fn inline_styles_are_cached() {
        let mut document = ChartDocument::new(ChartElement::new("Chart"));
        for _ in 0..3 {
            document
                .append_child(
                    document.root(),
                    ChartElement::new("Series").with_style("color: blue"),
                )
                .unwrap();
        }

        let resolver = StyleResolver::global();
        let styles = resolver.resolve(&document);
        assert_eq!(resolver.cache_size(), 1);
        assert_eq!(styles.iter().count(), 4);
    }
}
