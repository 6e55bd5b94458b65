//! Left-leaning red-black (LLRB) ordered containers.
//!
//! An LLRB tree is a binary search tree isomorphic to a 2-3 tree: every red
//! link leans left, no path has two red links in a row, and every path from
//! the root to an absent child crosses the same number of black links. The
//! tree stays within `2 * log2(n + 1)` levels.
//!
//! Nodes are kept in a slot [`Arena`](arena::Arena) and linked by `Option<u32>`
//! indices. Each child is owned by exactly one parent and there are no parent
//! links; the algorithms are recursive and rebuild links on the way back up.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`LlrbNode`], [`Color`], default comparator |
//! [`arena`] | slot storage with a free list |
//! [`llrb::util`] | rotations, color flips, insert and the delete family |
//! [`llrb::check`] | order, 2-3 shape and black-balance checks |
//! [`llrb`] | [`LlrbMap`] and [`LlrbSet`] |
//!
//! # Example
//!
//! ```
//! use llrb_tree::LlrbSet;
//!
//! let mut set = LlrbSet::new();
//! for k in [5, 3, 8] {
//!     set.insert(k);
//! }
//! assert!(set.erase(&3));
//! assert!(!set.contains(&3));
//! assert_eq!(set.min(), Some(&5));
//! set.check().unwrap();
//! ```

pub mod arena;
pub mod llrb;
pub mod types;

pub use llrb::{InvariantViolation, LlrbMap, LlrbSet};
pub use types::{Color, Comparator, LlrbNode};
