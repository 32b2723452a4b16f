//! Selector specificity.

use std::fmt;
use std::ops::Add;

use super::{Selector, SelectorPart, TagMatch};

/// Counts of id, class and tag constraints, compared in that order.
///
/// A single id outweighs any number of classes; `*` counts for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0);

    pub fn of_selector(selector: &Selector) -> Self {
        selector.parts.iter().map(Self::of_part).fold(Self::ZERO, |acc, part| acc + part)
    }

    pub fn of_part(part: &SelectorPart) -> Self {
        let tags = matches!(part.tag, Some(TagMatch::Named(_)));
        Self(
            part.id.is_some().into(),
            part.classes.len() as u32,
            tags.into(),
        )
    }

    /// Pair with a cascade order for a total ordering of rules.
    pub fn with_order(self, order: u32) -> SpecificityWithOrder {
        SpecificityWithOrder {
            specificity: self,
            order,
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// Specificity followed by cascade order; later rules win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecificityWithOrder {
    pub specificity: Specificity,
    pub order: u32,
}
