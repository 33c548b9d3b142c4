//! Lazily-populated lookup cache.
//!
//! A mapping from key to fetched value, populated on first miss, with an
//! explicit invalidation operation. The cache is owned by the calling
//! component and passed by reference to whatever needs it; there is no
//! module-level singleton.

use std::collections::HashMap;
use std::hash::Hash;

/// A key-value cache filled on first miss.
#[derive(Debug)]
pub struct LookupCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for LookupCache<K, V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Eq + Hash, V> LookupCache<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached value.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Stores a value, returning the previous one if the key was present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the cached value for `key`, running `fill` on first miss.
    pub fn get_or_insert_with(&mut self, key: K, fill: impl FnOnce() -> V) -> &V {
        self.entries.entry(key).or_insert_with(fill)
    }

    /// Drops a single entry, returning it if it was present.
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
