//! Structural invariant checks.
//!
//! Each check is an independent read-only walk over the tree. They are meant
//! for tests and diagnostics; none of them runs as part of a mutation.

use thiserror::Error;

use crate::arena::Arena;
use crate::types::Color;

use super::util::is_red;

/// A broken LLRB invariant, with the arena index of the node where it was
/// detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("key order violated at node {node}")]
    Order { node: u32 },
    #[error("red right link below node {node}")]
    RedRightLink { node: u32 },
    #[error("red node {node} has a red left child")]
    DoubleRed { node: u32 },
    #[error("black height mismatch below node {node}")]
    BlackImbalance { node: u32 },
    #[error("root {node} is red")]
    RedRoot { node: u32 },
}

/// In-order keys must be strictly increasing.
pub fn check_order<K, V, C>(
    arena: &Arena<K, V>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    C: Fn(&K, &K) -> i32,
{
    fn walk<K, V, C>(
        arena: &Arena<K, V>,
        node: Option<u32>,
        prev: &mut Option<u32>,
        comparator: &C,
    ) -> Result<(), InvariantViolation>
    where
        C: Fn(&K, &K) -> i32,
    {
        let Some(i) = node else {
            return Ok(());
        };
        walk(arena, arena[i].l, prev, comparator)?;
        if let Some(p) = *prev {
            if comparator(&arena[p].k, &arena[i].k) >= 0 {
                return Err(InvariantViolation::Order { node: i });
            }
        }
        *prev = Some(i);
        walk(arena, arena[i].r, prev, comparator)
    }

    walk(arena, root, &mut None, comparator)
}

/// No red right links, and no red node with a red left child.
pub fn check_23<K, V>(arena: &Arena<K, V>, root: Option<u32>) -> Result<(), InvariantViolation> {
    let Some(i) = root else {
        return Ok(());
    };
    let n = &arena[i];
    if is_red(arena, n.r) {
        return Err(InvariantViolation::RedRightLink { node: i });
    }
    if n.is_red() && is_red(arena, n.l) {
        return Err(InvariantViolation::DoubleRed { node: i });
    }
    check_23(arena, n.l)?;
    check_23(arena, n.r)
}

/// Every root-to-leaf path crosses the same number of black links.
pub fn check_black_balance<K, V>(
    arena: &Arena<K, V>,
    root: Option<u32>,
) -> Result<(), InvariantViolation> {
    let Some(root) = root else {
        return Ok(());
    };

    let mut black = 0usize;
    let mut curr = Some(root);
    while let Some(i) = curr {
        if !arena[i].is_red() {
            black += 1;
        }
        curr = arena[i].l;
    }

    fn walk<K, V>(
        arena: &Arena<K, V>,
        node: Option<u32>,
        parent: u32,
        black: usize,
    ) -> Result<(), InvariantViolation> {
        let Some(i) = node else {
            return if black == 0 {
                Ok(())
            } else {
                Err(InvariantViolation::BlackImbalance { node: parent })
            };
        };
        let black = if arena[i].is_red() {
            black
        } else {
            black
                .checked_sub(1)
                .ok_or(InvariantViolation::BlackImbalance { node: i })?
        };
        walk(arena, arena[i].l, i, black)?;
        walk(arena, arena[i].r, i, black)
    }

    walk(arena, Some(root), root, black)
}

pub fn check_root_black<K, V>(
    arena: &Arena<K, V>,
    root: Option<u32>,
) -> Result<(), InvariantViolation> {
    match root {
        Some(i) if arena[i].color == Color::Red => Err(InvariantViolation::RedRoot { node: i }),
        _ => Ok(()),
    }
}

/// Runs every check; the first violation found is returned.
pub fn assert_llrb_tree<K, V, C>(
    arena: &Arena<K, V>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    C: Fn(&K, &K) -> i32,
{
    check_root_black(arena, root)?;
    check_order(arena, root, comparator)?;
    check_23(arena, root)?;
    check_black_balance(arena, root)
}
