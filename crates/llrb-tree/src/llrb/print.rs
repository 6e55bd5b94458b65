use std::fmt::Debug;

use crate::arena::Arena;
use crate::types::Color;

/// Debug printer for LLRB trees.
///
/// Each node is rendered with its slot index, color and entry; children
/// follow on indented `L=` / `R=` lines, `∅` marking an absent child.
pub fn print<K, V>(arena: &Arena<K, V>, node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let color = match n.color {
                Color::Black => "black",
                Color::Red => "red",
            };
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.k, n.v
            )
        }
    }
}
