//! Cache of parsed inline styles.

use std::collections::HashMap;

use crate::style::StyleDeclarations;

/// Parsed inline declarations keyed by their source text.
///
/// Chart documents tend to repeat the same inline `style` text on many
/// elements (every series of a plot, every tick label); each distinct text
/// is parsed once.
pub struct DeclarationCache {
    cache: HashMap<String, StyleDeclarations>,
    max_size: usize,
}

impl DeclarationCache {
    /// Create a new cache.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a cache holding at most `max_size` entries.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size: max_size.max(1),
        }
    }

    /// Get cached declarations for a style text.
    pub fn get(&self, text: &str) -> Option<&StyleDeclarations> {
        self.cache.get(text)
    }

    /// Insert parsed declarations.
    pub fn insert(&mut self, text: impl Into<String>, declarations: StyleDeclarations) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            self.evict_half();
        }
        self.cache.insert(text.into(), declarations);
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn evict_half(&mut self) {
        let target = self.cache.len().div_ceil(2);
        let keys: Vec<_> = self.cache.keys().take(target).cloned().collect();
        for key in keys {
            self.cache.remove(&key);
        }
    }
}

impl Default for DeclarationCache {
    fn default() -> Self {
        Self::new()
    }
}
