use std::fmt;

use super::check::InvariantViolation;
use super::llrb_map::LlrbMap;

/// Ordered set backed by [`LlrbMap<K, ()>`].
pub struct LlrbSet<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: LlrbMap<K, (), C>,
}

impl<K> LlrbSet<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self {
            inner: LlrbMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: LlrbMap::with_capacity(capacity),
        }
    }
}

impl<K> Default for LlrbSet<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> LlrbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: LlrbMap::with_comparator(comparator),
        }
    }

    /// Returns `true` if `key` was not present. Inserting a present key
    /// changes nothing.
    pub fn insert(&mut self, key: K) -> bool {
        self.inner.insert(key, ()).is_none()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns `true` if `key` was present and has been removed.
    pub fn erase(&mut self, key: &K) -> bool {
        self.inner.remove_entry(key).is_some()
    }

    pub fn delete_min(&mut self) -> Option<K> {
        self.inner.pop_min().map(|(k, _)| k)
    }

    pub fn delete_max(&mut self) -> Option<K> {
        self.inner.pop_max().map(|(k, _)| k)
    }

    pub fn min(&self) -> Option<&K> {
        self.inner.min().map(|(k, _)| k)
    }

    pub fn max(&self) -> Option<&K> {
        self.inner.max().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn as_map(&self) -> &LlrbMap<K, (), C> {
        &self.inner
    }

    pub fn check(&self) -> Result<(), InvariantViolation> {
        self.inner.check()
    }
}

impl<K, C> fmt::Debug for LlrbSet<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
