//! A selector paired with declarations.

use crate::selector::{Selector, Specificity, SpecificityWithOrder};
use crate::style::StyleDeclarations;

/// `selector { declarations }`, with its specificity computed once.
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selector: Selector,
    pub declarations: StyleDeclarations,
    pub specificity: Specificity,
    /// Position within the stylesheet.
    pub order: u32,
}

impl StyleRule {
    /// Build a rule; `order` breaks specificity ties.
    pub fn new(selector: Selector, declarations: StyleDeclarations, order: u32) -> Self {
        let specificity = Specificity::of_selector(&selector);
        Self {
            selector,
            declarations,
            specificity,
            order,
        }
    }

    /// `Tag { … }`
    pub fn for_type(tag: impl Into<String>, declarations: StyleDeclarations, order: u32) -> Self {
        Self::new(Selector::tag(tag), declarations, order)
    }

    /// `.class { … }`
    pub fn for_class(
        class: impl Into<String>,
        declarations: StyleDeclarations,
        order: u32,
    ) -> Self {
        Self::new(Selector::class(class), declarations, order)
    }

    /// `#id { … }`
    pub fn for_id(id: impl Into<String>, declarations: StyleDeclarations, order: u32) -> Self {
        Self::new(Selector::id(id), declarations, order)
    }

    pub fn specificity_with_order(&self) -> SpecificityWithOrder {
        self.specificity.with_order(self.order)
    }
}
