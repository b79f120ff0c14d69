//! Human-readable rendering of a heap's forest
//!
//! An empty heap renders as `[Empty Heap]`. Otherwise each tree is written as
//! `(value)` for a leaf or `(value: child, child, ...)` for an inner node,
//! trees separated by `, `, values with two decimals. Infinite values are
//! spelled `+Inf` and `-Inf`. Meant for debugging and test assertions; nothing
//! parses it back.

use std::fmt;

use crate::fibonacci::FibonacciHeap;
use crate::node_list::{Node, NodeList};
use crate::storage::Arena;

const EMPTY_HEAP: &str = "[Empty Heap]";

impl<T> fmt::Display for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.roots.is_empty() {
            return f.write_str(EMPTY_HEAP);
        }
        write_forest(f, &self.arena, &self.roots)
    }
}

/// Writes `list` and everything below it without recursing, since tree depth
/// is not bounded by the degree bound
fn write_forest<T>(
    f: &mut fmt::Formatter<'_>,
    arena: &Arena<Node<T>>,
    list: &NodeList,
) -> fmt::Result {
    // One entry per open level: next sibling to write, and whether a sibling
    // has already been written at that level
    let mut stack = vec![(list.front(), false)];

    while let Some((next, started)) = stack.last_mut() {
        let Some(key) = *next else {
            stack.pop();
            if !stack.is_empty() {
                f.write_str(")")?;
            }
            continue;
        };

        let node = &arena[key];
        *next = node.next;
        if *started {
            f.write_str(", ")?;
        }
        *started = true;

        if node.children.is_empty() {
            write!(f, "({})", Fixed2(node.value))?;
        } else {
            write!(f, "({}: ", Fixed2(node.value))?;
            stack.push((node.children.front(), false));
        }
    }
    Ok(())
}

/// Two-decimal value with signed `Inf` for infinities
struct Fixed2(f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v == f64::INFINITY => f.write_str("+Inf"),
            v if v == f64::NEG_INFINITY => f.write_str("-Inf"),
            v => write!(f, "{v:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FibonacciHeap;

    #[test]
    fn test_empty_heap_marker() {
        let heap: FibonacciHeap<()> = FibonacciHeap::new();
        assert_eq!(heap.to_string(), "[Empty Heap]");
    }

    #[test]
    fn test_flat_forest() {
        let mut heap = FibonacciHeap::new();
        heap.insert(1.0, "a").unwrap();
        heap.insert(2.0, "b").unwrap();
        heap.insert(3.0, "c").unwrap();
        heap.insert(-1.0, "d").unwrap();
        assert_eq!(heap.to_string(), "(1.00), (2.00), (3.00), (-1.00)");
    }

    #[test]
    fn test_nested_trees() {
        let mut heap = FibonacciHeap::new();
        for v in [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.25] {
            heap.insert(v, ()).unwrap();
        }
        heap.extract_min().unwrap();
        assert_eq!(
            heap.to_string(),
            "(1.00: (2.00), (3.00: (4.00)), (5.00: (6.00), (7.00: (8.00)))), (9.25)"
        );
    }

    #[test]
    fn test_infinite_values() {
        let mut heap = FibonacciHeap::new();
        heap.insert(f64::INFINITY, ()).unwrap();
        heap.insert(0.5, ()).unwrap();
        heap.insert(f64::INFINITY, ()).unwrap();
        assert_eq!(heap.to_string(), "(+Inf), (0.50), (+Inf)");
        assert_eq!(super::Fixed2(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn test_drained_heap_renders_marker() {
        let mut heap = FibonacciHeap::new();
        heap.insert(1.0, ()).unwrap();
        heap.extract_min().unwrap();
        assert_eq!(heap.to_string(), "[Empty Heap]");
    }
}
