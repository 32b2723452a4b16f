//! Compound properties that fan out into several style keys.
//!
//! A compound property such as `-x-chart-axis-type: domain primary 1` is a
//! single declaration whose value decodes into several independent keys.
//! Decoding is atomic: either every part reads successfully and a full
//! mapping is produced, or nothing is produced at all.

use std::collections::HashMap;

use crate::keys::{self, StyleKey};
use crate::logging::targets;
use crate::parser::TokenStream;
use crate::types::constants::{axis_dimension, axis_position};

use super::{
    NumericReadHandler, OneOfConstantsReadHandler, ReadHandler, StyleValues, ValueHandler,
};

/// One ordered part of a compound property.
#[derive(Debug, Clone)]
pub struct CompoundPart {
    /// The key this part sets.
    pub key: StyleKey,
    /// The reader for this part.
    pub handler: ValueHandler,
}

/// Result of a compound read with diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundOutcome {
    /// The stream had no value at all.
    Absent,
    /// A value was present but the part for `key` could not be read.
    Malformed {
        /// Key of the first part that failed.
        key: StyleKey,
        /// Stream position of the unit that was rejected.
        position: usize,
    },
    /// Every part was read.
    Parsed(StyleValues),
}

/// Reads N ordered sub-values from one token stream.
#[derive(Debug, Clone, Default)]
pub struct CompoundReadHandler {
    parts: Vec<CompoundPart>,
}

impl CompoundReadHandler {
    /// Create a compound reader with no parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. Parts are read in the order they are added.
    pub fn with_part(mut self, key: StyleKey, handler: impl Into<ValueHandler>) -> Self {
        self.parts.push(CompoundPart {
            key,
            handler: handler.into(),
        });
        self
    }

    /// The reader for `-x-chart-axis-type`: dimension, position, order.
    pub fn axis_type() -> Self {
        Self::new()
            .with_part(
                keys::AXIS_DIMENSION,
                OneOfConstantsReadHandler::with_values(false, axis_dimension::ALL),
            )
            .with_part(
                keys::AXIS_POSITION,
                OneOfConstantsReadHandler::with_values(false, axis_position::ALL),
            )
            .with_part(keys::AXIS_ORDER, NumericReadHandler::new())
    }

    /// The parts in read order.
    pub fn parts(&self) -> &[CompoundPart] {
        &self.parts
    }

    /// Every key this property can set, independent of any input.
    pub fn affected_keys(&self) -> Vec<StyleKey> {
        self.parts.iter().map(|part| part.key).collect()
    }

    /// Read all parts, or nothing.
    ///
    /// Returns `None` both when the value is absent and when it is
    /// malformed; use [`diagnose`](Self::diagnose) to tell them apart.
    pub fn create_values(&self, stream: &mut TokenStream<'_>) -> Option<StyleValues> {
        match self.diagnose(stream) {
            CompoundOutcome::Parsed(values) => Some(values),
            CompoundOutcome::Absent | CompoundOutcome::Malformed { .. } => None,
        }
    }

    /// Read all parts, reporting which part failed.
    ///
    /// On failure the stream is rewound to where it started.
    pub fn diagnose(&self, stream: &mut TokenStream<'_>) -> CompoundOutcome {
        if stream.current().is_none() {
            return CompoundOutcome::Absent;
        }

        let start = stream.state();
        let mut values = HashMap::with_capacity(self.parts.len());

        for part in &self.parts {
            match part.handler.create_value(&part.key, stream) {
                Some(value) => {
                    values.insert(part.key, value);
                }
                None => {
                    let position = stream.position();
                    tracing::trace!(
                        target: targets::PARSER,
                        key = %part.key,
                        position,
                        "compound part rejected"
                    );
                    stream.reset(&start);
                    return CompoundOutcome::Malformed {
                        key: part.key,
                        position,
                    };
                }
            }
        }

        CompoundOutcome::Parsed(values)
    }
}
