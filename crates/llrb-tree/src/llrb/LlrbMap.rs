use std::fmt;

use log::{debug, trace};

use crate::arena::Arena;
use crate::types::default_comparator;

use super::check::{assert_llrb_tree, InvariantViolation};
use super::print::print;
use super::util;

/// Ordered map on a left-leaning red-black tree.
///
/// Keys are ordered by a three-way comparator (`Ord` by default). Nodes are
/// stored in a slot arena; removed nodes free their slot for reuse.
pub struct LlrbMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<K, V>,
    root: Option<u32>,
    comparator: C,
}

impl<K, V> LlrbMap<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Preallocates arena slots for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<K>)
    }
}

impl<K, V> Default for LlrbMap<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> LlrbMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            comparator,
        }
    }

    /// Inserts `key`, returning the value it replaced if the key was already
    /// present. An existing key keeps its original key instance.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old) = util::insert(&mut self.arena, self.root, key, value, &self.comparator);
        self.root = root;
        trace!("insert: replaced={} len={}", old.is_some(), self.len());
        old
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        util::find(&self.arena, self.root, key, &self.comparator).map(|i| &self.arena[i].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        util::find(&self.arena, self.root, key, &self.comparator).map(|i| &mut self.arena[i].v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        util::find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (root, removed) = util::delete(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        trace!("remove: hit={} len={}", removed.is_some(), self.len());
        removed
    }

    /// Removes the smallest entry. `None` on an empty map.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let (root, removed) = util::delete_min(&mut self.arena, self.root);
        self.root = root;
        trace!("pop_min: len={}", self.len());
        removed
    }

    /// Removes the largest entry. `None` on an empty map.
    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let (root, removed) = util::delete_max(&mut self.arena, self.root);
        self.root = root;
        trace!("pop_max: len={}", self.len());
        removed
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| util::min(&self.arena, root))
            .map(|i| (&self.arena[i].k, &self.arena[i].v))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| util::max(&self.arena, root))
            .map(|i| (&self.arena[i].k, &self.arena[i].v))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &Arena<K, V> {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Verifies key order, the 2-3 shape, black balance and root color.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        assert_llrb_tree(&self.arena, self.root, &self.comparator).inspect_err(|err| {
            debug!("check failed: {err}");
        })
    }
}

impl<K, V, C> fmt::Debug for LlrbMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(&self.arena, self.root, ""))
    }
}
