//! Slot arena backing the tree.
//!
//! Rust divergence: instead of heap pointers, nodes are addressed by `u32`
//! slot indices. Freed slots are chained into a free list and reused by the
//! next allocation, so a long-lived tree with churn does not grow without
//! bound.

use std::ops::{Index, IndexMut};

use crate::types::LlrbNode;

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(LlrbNode<K, V>),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<u32>,
    len: usize,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated, live or vacant.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn alloc(&mut self, node: LlrbNode<K, V>) -> u32 {
        self.len += 1;
        match self.free_head {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                let Slot::Vacant { next_free } = *slot else {
                    unreachable!("free list points at occupied slot {idx}");
                };
                self.free_head = next_free;
                *slot = Slot::Occupied(node);
                idx
            }
            None => {
                let idx =
                    u32::try_from(self.slots.len()).expect("arena exhausted u32 index space");
                self.slots.push(Slot::Occupied(node));
                idx
            }
        }
    }

    /// Vacates `idx` and hands the node back to the caller.
    pub fn free(&mut self, idx: u32) -> LlrbNode<K, V> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[idx as usize], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double free of arena slot {idx}"),
        }
    }

    pub fn get(&self, idx: u32) -> Option<&LlrbNode<K, V>> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Swaps key and value between two live nodes, leaving links and colors
    /// in place.
    pub fn swap_entries(&mut self, a: u32, b: u32) {
        let (ai, bi) = (a as usize, b as usize);
        if ai == bi {
            return;
        }
        let (lo, hi) = if ai < bi { (ai, bi) } else { (bi, ai) };
        let (left, right) = self.slots.split_at_mut(hi);
        match (&mut left[lo], &mut right[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => {
                std::mem::swap(&mut x.k, &mut y.k);
                std::mem::swap(&mut x.v, &mut y.v);
            }
            _ => panic!("swap_entries on vacant slot ({a}, {b})"),
        }
    }
}

impl<K, V> Index<u32> for Arena<K, V> {
    type Output = LlrbNode<K, V>;

    fn index(&self, idx: u32) -> &Self::Output {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to vacant arena slot {idx}"),
        }
    }
}

impl<K, V> IndexMut<u32> for Arena<K, V> {
    fn index_mut(&mut self, idx: u32) -> &mut Self::Output {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to vacant arena slot {idx}"),
        }
    }
}
