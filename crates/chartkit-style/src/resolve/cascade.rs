//! Rule collection and cascading.

use crate::rules::{StyleRule, StyleSheet};
use crate::selector::{ElementTree, SelectorMatcher, SpecificityWithOrder};
use crate::style::{LayoutStyle, StyleDeclarations};

/// Collect the rules matching `node`, lowest precedence first.
///
/// Sheets are visited in priority order; within equal priority, earlier
/// sheets come first. Rules are then sorted by specificity and source order
/// so that applying them in sequence lets later ones win.
pub fn matching_rules<'s, T: ElementTree>(
    stylesheets: &[&'s StyleSheet],
    tree: &T,
    node: T::Node,
) -> Vec<&'s StyleRule> {
    let mut sheets = stylesheets.to_vec();
    sheets.sort_by_key(|sheet| sheet.priority);

    let mut matched: Vec<(&StyleRule, SpecificityWithOrder)> = vec![];
    let mut global_order = 0u32;

    for sheet in sheets {
        let priority_offset = sheet.priority.as_order_offset();

        for rule in &sheet.rules {
            if SelectorMatcher::matches(&rule.selector, tree, node) {
                matched.push((rule, rule.specificity.with_order(priority_offset | global_order)));
            }
            global_order += 1;
        }
    }

    // Priority dominates specificity: compare the priority bits first.
    matched.sort_by_key(|(_, key)| (key.order >> 24, *key));
    matched.into_iter().map(|(rule, _)| rule).collect()
}

/// Cascade matched rules and then inline declarations into a layout style.
pub fn cascade(rules: &[&StyleRule], inline: Option<&StyleDeclarations>) -> LayoutStyle {
    let mut style = LayoutStyle::new();
    for rule in rules {
        style.apply(&rule.declarations);
    }
    if let Some(inline) = inline {
        style.apply(inline);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ChartDocument, ChartElement};
    use crate::keys::AXIS_LOCATION;
    use crate::rules::StylePriority;
    use crate::selector::Selector;
    use crate::types::constants::axis_location;

    fn location(value: crate::types::CssConstant) -> StyleDeclarations {
        StyleDeclarations::new().with(AXIS_LOCATION, value)
    }

    #[test]
    fn specificity_then_order() {
        let mut document = ChartDocument::new(ChartElement::new("Chart"));
        let series = document
            .append_child(document.root(), ChartElement::new("Series").with_class("alt"))
            .unwrap();

        let mut sheet = StyleSheet::document();
        sheet.add_rule(Selector::class("alt"), location(axis_location::SECONDARY));
        sheet.add_rule(Selector::tag("Series"), location(axis_location::PRIMARY));
        sheet.add_rule(Selector::tag("Axis"), location(axis_location::PRIMARY));

        let rules = matching_rules(&[&sheet], &document, series);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector.to_string(), "Series");

        let style = cascade(&rules, None);
        assert_eq!(style.axis_location(), Some(axis_location::SECONDARY));
    }

    #[test]
    fn priority_beats_specificity() {
        let mut document = ChartDocument::new(ChartElement::new("Chart"));
        let series = document
            .append_child(document.root(), ChartElement::new("Series").with_id("s1"))
            .unwrap();

        let mut overrides = StyleSheet::new(StylePriority::Override);
        overrides.add_rule(Selector::universal(), location(axis_location::PRIMARY));
        let mut sheet = StyleSheet::document();
        sheet.add_rule(Selector::id("s1"), location(axis_location::SECONDARY));

        let rules = matching_rules(&[&overrides, &sheet], &document, series);
        let style = cascade(&rules, None);
        assert_eq!(style.axis_location(), Some(axis_location::PRIMARY));

        let inline = location(axis_location::SECONDARY);
        let style = cascade(&rules, Some(&inline));
        assert_eq!(style.axis_location(), Some(axis_location::SECONDARY));
    }
}
