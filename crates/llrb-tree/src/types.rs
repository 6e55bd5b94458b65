//! Node model.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to their
//! children by `Option<u32>` index. Every child slot is owned by exactly one
//! parent; there is no parent back-link, so rotations only ever rewrite the
//! links of the nodes they touch.

/// Color of the link coming into a node from its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A left-leaning red-black tree node.
#[derive(Clone, Debug)]
pub struct LlrbNode<K, V> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub color: Color,
}

impl<K, V> LlrbNode<K, V> {
    /// New nodes are red leaves.
    pub fn new(k: K, v: V) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
            color: Color::Red,
        }
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Three-way key comparator: negative, zero or positive.
///
/// Any `Box<Comparator<K>>` can stand in for the comparator parameter of the
/// map and set when the ordering is picked at runtime.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Three-way comparison used when no comparator is supplied: negative, zero
/// or positive.
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}
