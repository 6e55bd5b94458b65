//! Left-leaning red-black tree family.

pub mod check;
#[path = "LlrbMap.rs"]
pub mod llrb_map;
#[path = "LlrbSet.rs"]
pub mod llrb_set;
pub mod print;
pub mod util;

pub use check::{assert_llrb_tree, InvariantViolation};
pub use llrb_map::LlrbMap;
pub use llrb_set::LlrbSet;
pub use print::print;
