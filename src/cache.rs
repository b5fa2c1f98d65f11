//! Bounded width cache with insertion-order eviction
//!
//! Once full, the entry inserted first is dropped, regardless of how
//! recently it was read. Reads never reorder entries.

use std::collections::{HashMap, VecDeque};

use crate::codepoint::CodePoint;
use crate::types::DisplayWidth;

/// Cache key: code point plus the `ambiguous_as_wide` flag it was resolved with
pub type CacheKey = (CodePoint, bool);

/// Insertion-ordered bounded map from [`CacheKey`] to width
#[derive(Debug, Clone)]
pub struct InsertionOrderCache {
    entries: HashMap<CacheKey, DisplayWidth>,
    /// Keys oldest first
    order: VecDeque<CacheKey>,
    capacity: usize,
}

impl InsertionOrderCache {
    /// Create an empty cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Cached width for `key`
    pub fn get(&self, key: &CacheKey) -> Option<DisplayWidth> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a width, evicting the oldest entry when full.
    ///
    /// Returns the evicted key, if any. Re-inserting an existing key updates
    /// its width but keeps its position. With capacity 0 nothing is stored.
    pub fn insert(&mut self, key: CacheKey, width: DisplayWidth) -> Option<CacheKey> {
        if self.capacity == 0 {
            return None;
        }
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = width;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.order.pop_front().inspect(|oldest| {
                self.entries.remove(oldest);
            })
        } else {
            None
        };

        self.order.push_back(key);
        self.entries.insert(key, width);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys in insertion order, oldest first
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
