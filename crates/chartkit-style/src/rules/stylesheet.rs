//! Ordered rule collections with a cascade priority.

use crate::registry::StyleRegistry;
use crate::rules::StyleRule;
use crate::selector::Selector;
use crate::style::StyleDeclarations;

/// Where a stylesheet comes from. A higher priority wins over any
/// specificity from a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StylePriority {
    /// Built-in chart defaults.
    Default = 0,
    /// Stylesheets referenced by the chart document.
    Document = 1,
    /// Overrides supplied by the embedding application.
    Override = 2,
}

impl StylePriority {
    /// Priority bits placed above the rule order in a cascade key.
    pub fn as_order_offset(&self) -> u32 {
        (*self as u32) << 24
    }
}

/// Rules in source order.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub rules: Vec<StyleRule>,
    pub priority: StylePriority,
}

impl StyleSheet {
    /// An empty sheet.
    pub fn new(priority: StylePriority) -> Self {
        Self {
            rules: vec![],
            priority,
        }
    }

    /// An empty sheet for built-in defaults.
    pub fn defaults() -> Self {
        Self::new(StylePriority::Default)
    }

    /// An empty sheet at document priority.
    pub fn document() -> Self {
        Self::new(StylePriority::Document)
    }

    /// Parse a stylesheet from CSS text, resolving properties with `registry`.
    ///
    /// Rules that fail to parse are logged and skipped, so this never fails.
    pub fn from_css(css: &str, priority: StylePriority, registry: &StyleRegistry) -> Self {
        let rules = crate::parser::parse_stylesheet(css, registry);
        Self { rules, priority }
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(&mut self, selector: Selector, declarations: StyleDeclarations) {
        let order = self.rules.len() as u32;
        self.rules.push(StyleRule::new(selector, declarations, order));
    }

    /// Append a built rule, renumbering its order.
    pub fn add_style_rule(&mut self, mut rule: StyleRule) {
        rule.order = self.rules.len() as u32;
        self.rules.push(rule);
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in source order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::document()
    }
}
