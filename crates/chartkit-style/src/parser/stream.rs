//! Forward-only cursor over lexical units.

use super::LexicalUnit;

/// A saved cursor position, used to rewind after a failed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState(usize);

/// Forward-only view over the lexical units of one property value.
///
/// The stream is positioned at a current unit; `None` marks the end of the
/// value list. Readers advance the stream past the units they consume.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    units: &'a [LexicalUnit],
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a stream positioned at the first unit.
    pub fn new(units: &'a [LexicalUnit]) -> Self {
        Self { units, position: 0 }
    }

    /// The current unit, or `None` at the end of the value.
    pub fn current(&self) -> Option<&'a LexicalUnit> {
        self.units.get(self.position)
    }

    /// Move to the next unit and return it.
    pub fn advance(&mut self) -> Option<&'a LexicalUnit> {
        if self.position < self.units.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Whether the stream has no current unit.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.units.len()
    }

    /// Zero-based index of the current unit.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Save the current position.
    pub fn state(&self) -> StreamState {
        StreamState(self.position)
    }

    /// Rewind (or fast-forward) to a saved position.
    pub fn reset(&mut self, state: &StreamState) {
        self.position = state.0.min(self.units.len());
    }
}
