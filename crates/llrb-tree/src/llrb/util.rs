//! Left-leaning red-black tree algorithms over an [`Arena`].
//!
//! Every function takes the index of a subtree root and returns the index of
//! the (possibly different) root of that subtree after the operation. The
//! public entry points (`insert`, `delete_min`, `delete_max`, `delete`) work
//! on the whole tree and paint the resulting root black; the recursive
//! helpers below them never do.

use crate::arena::Arena;
use crate::types::{Color, LlrbNode};

/// Absent children count as black leaves.
#[inline]
pub fn is_red<K, V>(arena: &Arena<K, V>, node: Option<u32>) -> bool {
    node.map(|i| arena[i].is_red()).unwrap_or(false)
}

/// `h.l` is a 2-node: black, and its own left child is black too.
#[inline]
fn left_is_2node<K, V>(arena: &Arena<K, V>, h: u32) -> bool {
    let l = arena[h].l;
    !is_red(arena, l) && !is_red(arena, l.and_then(|l| arena[l].l))
}

#[inline]
fn right_is_2node<K, V>(arena: &Arena<K, V>, h: u32) -> bool {
    let r = arena[h].r;
    !is_red(arena, r) && !is_red(arena, r.and_then(|r| arena[r].l))
}

/// Turn a right-leaning red link into a left-leaning one.
pub fn rotate_left<K, V>(arena: &mut Arena<K, V>, h: u32) -> u32 {
    let x = arena[h].r.expect("rotate_left requires right child");
    arena[h].r = arena[x].l;
    arena[x].l = Some(h);
    arena[x].color = arena[h].color;
    arena[h].color = Color::Red;
    x
}

/// Turn a left-leaning red link into a right-leaning one.
pub fn rotate_right<K, V>(arena: &mut Arena<K, V>, h: u32) -> u32 {
    let x = arena[h].l.expect("rotate_right requires left child");
    arena[h].l = arena[x].r;
    arena[x].r = Some(h);
    arena[x].color = arena[h].color;
    arena[h].color = Color::Red;
    x
}

/// Flip colors of node and its children.
pub fn color_flip<K, V>(arena: &mut Arena<K, V>, h: u32) {
    arena[h].color = arena[h].color.flip();
    if let Some(l) = arena[h].l {
        arena[l].color = arena[l].color.flip();
    }
    if let Some(r) = arena[h].r {
        arena[r].color = arena[r].color.flip();
    }
}

/// Make `h.l` or one of its children red, borrowing from the right sibling.
pub fn move_red_left<K, V>(arena: &mut Arena<K, V>, mut h: u32) -> u32 {
    color_flip(arena, h);
    if let Some(r) = arena[h].r {
        if is_red(arena, arena[r].l) {
            let r = rotate_right(arena, r);
            arena[h].r = Some(r);
            h = rotate_left(arena, h);
            color_flip(arena, h);
        }
    }
    h
}

/// Make `h.r` or one of its children red, borrowing from the left sibling.
pub fn move_red_right<K, V>(arena: &mut Arena<K, V>, mut h: u32) -> u32 {
    color_flip(arena, h);
    if let Some(l) = arena[h].l {
        if is_red(arena, arena[l].l) {
            h = rotate_right(arena, h);
            color_flip(arena, h);
        }
    }
    h
}

/// Restore the left-leaning invariants at `h` on the way back up.
///
/// Each check re-reads the children of the current `h`, which the previous
/// step may have replaced.
pub fn balance<K, V>(arena: &mut Arena<K, V>, mut h: u32) -> u32 {
    if is_red(arena, arena[h].r) && !is_red(arena, arena[h].l) {
        h = rotate_left(arena, h);
    }
    if is_red(arena, arena[h].l) && is_red(arena, arena[h].l.and_then(|l| arena[l].l)) {
        h = rotate_right(arena, h);
    }
    if is_red(arena, arena[h].l) && is_red(arena, arena[h].r) {
        color_flip(arena, h);
    }
    h
}

fn paint_root_black<K, V>(arena: &mut Arena<K, V>, root: Option<u32>) -> Option<u32> {
    if let Some(root) = root {
        arena[root].color = Color::Black;
    }
    root
}

/// Insert `k`, or overwrite the value stored under an equal key.
///
/// Returns the new root and the previous value, if any. An equal key leaves
/// the shape of the tree untouched.
pub fn insert<K, V, C>(
    arena: &mut Arena<K, V>,
    root: Option<u32>,
    k: K,
    v: V,
    comparator: &C,
) -> (Option<u32>, Option<V>)
where
    C: Fn(&K, &K) -> i32,
{
    let (root, old) = insert_at(arena, root, k, v, comparator);
    (paint_root_black(arena, Some(root)), old)
}

fn insert_at<K, V, C>(
    arena: &mut Arena<K, V>,
    node: Option<u32>,
    k: K,
    v: V,
    comparator: &C,
) -> (u32, Option<V>)
where
    C: Fn(&K, &K) -> i32,
{
    let Some(h) = node else {
        return (arena.alloc(LlrbNode::new(k, v)), None);
    };

    let cmp = comparator(&k, &arena[h].k);
    let old = if cmp < 0 {
        let l = arena[h].l;
        let (l, old) = insert_at(arena, l, k, v, comparator);
        arena[h].l = Some(l);
        old
    } else if cmp > 0 {
        let r = arena[h].r;
        let (r, old) = insert_at(arena, r, k, v, comparator);
        arena[h].r = Some(r);
        old
    } else {
        return (h, Some(std::mem::replace(&mut arena[h].v, v)));
    };

    (balance(arena, h), old)
}

/// Remove the smallest entry. No-op on an empty tree.
pub fn delete_min<K, V>(arena: &mut Arena<K, V>, root: Option<u32>) -> (Option<u32>, Option<(K, V)>) {
    let Some(root) = root else {
        return (None, None);
    };
    let (root, removed) = delete_min_at(arena, root);
    (paint_root_black(arena, root), Some(removed))
}

fn delete_min_at<K, V>(arena: &mut Arena<K, V>, mut h: u32) -> (Option<u32>, (K, V)) {
    if arena[h].l.is_none() {
        debug_assert!(arena[h].r.is_none(), "minimum node {h} has a right child");
        let node = arena.free(h);
        return (None, (node.k, node.v));
    }

    if left_is_2node(arena, h) {
        h = move_red_left(arena, h);
    }

    let l = arena[h].l.expect("left child survives move_red_left");
    let (l, removed) = delete_min_at(arena, l);
    arena[h].l = l;

    (Some(balance(arena, h)), removed)
}

/// Remove the largest entry. No-op on an empty tree.
pub fn delete_max<K, V>(arena: &mut Arena<K, V>, root: Option<u32>) -> (Option<u32>, Option<(K, V)>) {
    let Some(root) = root else {
        return (None, None);
    };
    let (root, removed) = delete_max_at(arena, root);
    (paint_root_black(arena, root), Some(removed))
}

fn delete_max_at<K, V>(arena: &mut Arena<K, V>, mut h: u32) -> (Option<u32>, (K, V)) {
    if is_red(arena, arena[h].l) {
        h = rotate_right(arena, h);
    }

    if arena[h].r.is_none() {
        debug_assert!(arena[h].l.is_none(), "maximum node {h} has a left child");
        let node = arena.free(h);
        return (None, (node.k, node.v));
    }

    if right_is_2node(arena, h) {
        h = move_red_right(arena, h);
    }

    let r = arena[h].r.expect("right child survives move_red_right");
    let (r, removed) = delete_max_at(arena, r);
    arena[h].r = r;

    (Some(balance(arena, h)), removed)
}

/// Remove the entry stored under `key`.
///
/// Returns the tree unchanged and `None` when `key` is absent; the recursive
/// walk only ever runs for keys known to be present.
pub fn delete<K, V, C>(
    arena: &mut Arena<K, V>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, Option<(K, V)>)
where
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return (None, None);
    };
    if find(arena, Some(root), key, comparator).is_none() {
        return (Some(root), None);
    }
    let (root, removed) = delete_at(arena, root, key, comparator);
    (paint_root_black(arena, root), Some(removed))
}

fn delete_at<K, V, C>(
    arena: &mut Arena<K, V>,
    mut h: u32,
    key: &K,
    comparator: &C,
) -> (Option<u32>, (K, V))
where
    C: Fn(&K, &K) -> i32,
{
    let removed;

    if comparator(key, &arena[h].k) < 0 {
        if left_is_2node(arena, h) {
            h = move_red_left(arena, h);
        }
        let l = arena[h].l.expect("delete: key must be present");
        let (l, r) = delete_at(arena, l, key, comparator);
        arena[h].l = l;
        removed = r;
    } else {
        // After this rotation `h` holds a smaller key, so the comparisons
        // below re-read it instead of reusing the one above.
        if is_red(arena, arena[h].l) {
            h = rotate_right(arena, h);
        }

        if arena[h].r.is_none() {
            assert!(
                comparator(key, &arena[h].k) == 0,
                "delete: key must be present"
            );
            debug_assert!(arena[h].l.is_none(), "matched node {h} is not a leaf");
            let node = arena.free(h);
            return (None, (node.k, node.v));
        }

        if right_is_2node(arena, h) {
            h = move_red_right(arena, h);
        }

        let r = arena[h].r.expect("right child survives move_red_right");
        if comparator(key, &arena[h].k) == 0 {
            let successor = min(arena, r);
            arena.swap_entries(h, successor);
            let (r, rem) = delete_min_at(arena, r);
            arena[h].r = r;
            removed = rem;
        } else {
            let (r, rem) = delete_at(arena, r, key, comparator);
            arena[h].r = r;
            removed = rem;
        }
    }

    (Some(balance(arena, h)), removed)
}

pub fn find<K, V, C>(arena: &Arena<K, V>, root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, &arena[i].k);
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 { arena[i].l } else { arena[i].r };
    }
    None
}

/// Leftmost node of the subtree.
pub fn min<K, V>(arena: &Arena<K, V>, mut node: u32) -> u32 {
    while let Some(l) = arena[node].l {
        node = l;
    }
    node
}

/// Rightmost node of the subtree.
pub fn max<K, V>(arena: &Arena<K, V>, mut node: u32) -> u32 {
    while let Some(r) = arena[node].r {
        node = r;
    }
    node
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<K, V>(arena: &Arena<K, V>, node: Option<u32>) -> usize {
    match node {
        None => 0,
        Some(i) => 1 + height(arena, arena[i].l).max(height(arena, arena[i].r)),
    }
}

pub fn size<K, V>(arena: &Arena<K, V>, node: Option<u32>) -> usize {
    match node {
        None => 0,
        Some(i) => 1 + size(arena, arena[i].l) + size(arena, arena[i].r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_comparator;

    fn leaf(arena: &mut Arena<i32, ()>, k: i32, color: Color) -> u32 {
        let i = arena.alloc(LlrbNode::new(k, ()));
        arena[i].color = color;
        i
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        let mut arena = Arena::new();
        let h = leaf(&mut arena, 1, Color::Black);
        let x = leaf(&mut arena, 2, Color::Red);
        let xl = leaf(&mut arena, 3, Color::Black);
        arena[h].r = Some(x);
        arena[x].l = Some(xl);

        let top = rotate_left(&mut arena, h);
        assert_eq!(top, x);
        assert_eq!(arena[x].color, Color::Black);
        assert_eq!(arena[h].color, Color::Red);
        assert_eq!(arena[x].l, Some(h));
        assert_eq!(arena[h].r, Some(xl));
    }

    #[test]
    fn rotate_right_promotes_left_child() {
        let mut arena = Arena::new();
        let h = leaf(&mut arena, 2, Color::Black);
        let x = leaf(&mut arena, 1, Color::Red);
        arena[h].l = Some(x);

        let top = rotate_right(&mut arena, h);
        assert_eq!(top, x);
        assert_eq!(arena[x].r, Some(h));
        assert_eq!(arena[h].l, None);
        assert_eq!(arena[x].color, Color::Black);
        assert_eq!(arena[h].color, Color::Red);
    }

    #[test]
    fn balance_splits_temporary_4node() {
        let mut arena = Arena::new();
        let h = leaf(&mut arena, 2, Color::Black);
        let l = leaf(&mut arena, 1, Color::Red);
        let r = leaf(&mut arena, 3, Color::Red);
        arena[h].l = Some(l);
        arena[h].r = Some(r);

        assert_eq!(balance(&mut arena, h), h);
        assert_eq!(arena[h].color, Color::Red);
        assert_eq!(arena[l].color, Color::Black);
        assert_eq!(arena[r].color, Color::Black);
    }

    #[test]
    fn balance_straightens_right_leaning_red() {
        let mut arena = Arena::new();
        let h = leaf(&mut arena, 1, Color::Black);
        let r = leaf(&mut arena, 2, Color::Red);
        arena[h].r = Some(r);

        let top = balance(&mut arena, h);
        assert_eq!(top, r);
        assert_eq!(arena[r].l, Some(h));
        assert!(arena[h].is_red());
        assert!(!arena[r].is_red());
    }

    #[test]
    fn balance_rotates_left_left_red_chain_then_flips() {
        let mut arena = Arena::new();
        let h = leaf(&mut arena, 3, Color::Black);
        let l = leaf(&mut arena, 2, Color::Red);
        let ll = leaf(&mut arena, 1, Color::Red);
        arena[h].l = Some(l);
        arena[l].l = Some(ll);

        let top = balance(&mut arena, h);
        assert_eq!(top, l);
        assert_eq!(arena[l].l, Some(ll));
        assert_eq!(arena[l].r, Some(h));
        assert!(arena[l].is_red());
        assert!(!arena[ll].is_red());
        assert!(!arena[h].is_red());
    }

    #[test]
    fn insert_duplicate_replaces_value_only() {
        let mut arena = Arena::new();
        let cmp = default_comparator::<i32>;
        let (root, old) = insert(&mut arena, None, 1, "a", &cmp);
        assert_eq!(old, None);
        let (root2, old) = insert(&mut arena, root, 1, "b", &cmp);
        assert_eq!(root2, root);
        assert_eq!(old, Some("a"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn delete_on_empty_tree_is_noop() {
        let mut arena = Arena::<i32, ()>::new();
        let cmp = default_comparator::<i32>;
        assert_eq!(delete_min(&mut arena, None), (None, None));
        assert_eq!(delete_max(&mut arena, None), (None, None));
        assert_eq!(delete(&mut arena, None, &1, &cmp), (None, None));
    }

    #[test]
    fn delete_absent_key_leaves_tree_alone() {
        let mut arena = Arena::new();
        let cmp = default_comparator::<i32>;
        let mut root = None;
        for k in [5, 3, 8] {
            root = insert(&mut arena, root, k, (), &cmp).0;
        }
        let (after, removed) = delete(&mut arena, root, &4, &cmp);
        assert_eq!(after, root);
        assert_eq!(removed, None);
        assert_eq!(size(&arena, after), 3);
    }

    #[test]
    fn single_node_delete_empties_tree() {
        let mut arena = Arena::new();
        let cmp = default_comparator::<i32>;
        let (root, _) = insert(&mut arena, None, 1, 10, &cmp);
        let (root, removed) = delete(&mut arena, root, &1, &cmp);
        assert_eq!(root, None);
        assert_eq!(removed, Some((1, 10)));
        assert!(arena.is_empty());
    }
}
