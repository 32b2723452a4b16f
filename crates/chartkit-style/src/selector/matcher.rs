//! Selector matching algorithm.

use super::{Combinator, Selector, SelectorPart, TagMatch};

/// What a selector part can see of an element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementMatchContext<'a> {
    /// Element tag (e.g., "Axis", "Series").
    pub tag: &'a str,
    /// Element id (for #id selectors).
    pub id: Option<&'a str>,
    /// Element classes.
    pub classes: &'a [String],
}

/// A tree of elements that selectors can be matched against.
pub trait ElementTree {
    /// Handle of one element in the tree.
    type Node: Copy;

    /// Match context of an element.
    fn match_context(&self, node: Self::Node) -> ElementMatchContext<'_>;

    /// Parent of an element, `None` for the root.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;
}

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a selector part matches an element.
    pub fn part_matches(part: &SelectorPart, context: &ElementMatchContext<'_>) -> bool {
        if let Some(TagMatch::Named(tag)) = &part.tag
            && tag != context.tag
        {
            return false;
        }

        if let Some(id) = &part.id
            && context.id != Some(id.as_str())
        {
            return false;
        }

        part.classes
            .iter()
            .all(|class| context.classes.iter().any(|c| c == class))
    }

    /// Check if a selector's subject (rightmost part) matches the element.
    pub fn matches_subject(selector: &Selector, context: &ElementMatchContext<'_>) -> bool {
        selector
            .subject()
            .is_some_and(|subject| Self::part_matches(subject, context))
    }

    /// Check if a full selector matches, considering combinators.
    ///
    /// The selector is walked right to left. A descendant combinator tries
    /// every ancestor in turn, so `A B C` matches when any chain of
    /// ancestors satisfies the remaining parts.
    pub fn matches<T: ElementTree>(selector: &Selector, tree: &T, node: T::Node) -> bool {
        match selector.parts.len() {
            0 => false,
            len => Self::matches_from(selector, len - 1, tree, node),
        }
    }

    fn matches_from<T: ElementTree>(
        selector: &Selector,
        index: usize,
        tree: &T,
        node: T::Node,
    ) -> bool {
        let Some(part) = selector.parts.get(index) else {
            return false;
        };
        if !Self::part_matches(part, &tree.match_context(node)) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match selector.combinators.get(index - 1) {
            Some(Combinator::Child) => tree
                .parent_of(node)
                .is_some_and(|parent| Self::matches_from(selector, index - 1, tree, parent)),
            Some(Combinator::Descendant) => {
                let mut ancestor = tree.parent_of(node);
                while let Some(current) = ancestor {
                    if Self::matches_from(selector, index - 1, tree, current) {
                        return true;
                    }
                    ancestor = tree.parent_of(current);
                }
                false
            }
            None => false,
        }
    }
}
