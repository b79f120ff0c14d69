//! Structural checks over a heap's forest
//!
//! These walk every node, so they cost O(n). They exist for tests, debug
//! assertions, and callers who want to audit a heap after a long run.

use crate::error::InvariantViolation;
use crate::fibonacci::FibonacciHeap;
use crate::node_list::{Node, NodeList};
use crate::storage::{Arena, NodeKey};

fn check_list<T>(arena: &Arena<Node<T>>, list: &NodeList) -> Result<(), InvariantViolation> {
    let walked = list.iter(arena).take(list.len() + 1).count();
    if walked != list.len() {
        return Err(InvariantViolation::ListLength {
            stored: list.len(),
            walked,
        });
    }
    Ok(())
}

impl<T> FibonacciHeap<T> {
    /// Number of nodes reachable by descending from every root
    ///
    /// Always equal to [`len`](Self::len) on a healthy heap.
    pub fn count_nodes(&self) -> usize {
        self.descend(|_| ())
    }

    /// Degrees of the top-level roots, in forest order
    pub fn root_degrees(&self) -> Vec<usize> {
        self.roots
            .iter(&self.arena)
            .map(|key| self.arena[key].degree())
            .collect()
    }

    /// Largest number of direct children held by any node
    pub fn max_degree(&self) -> usize {
        let mut max = 0;
        self.descend(|node| max = max.max(node.degree()));
        max
    }

    /// Checks every structural invariant of the heap
    ///
    /// - heap order: no child's key is below its parent's
    /// - roots carry no parent link and no mark
    /// - every child's parent link points at the node owning its list
    /// - the cached minimum is a root holding the lowest root key
    /// - stored list lengths match their traversals
    /// - the reachable node count matches [`len`](Self::len)
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check_list(&self.arena, &self.roots)?;

        let mut lowest: Option<f64> = None;
        for key in self.roots.iter(&self.arena) {
            let node = &self.arena[key];
            if !node.is_root() || node.marked {
                return Err(InvariantViolation::BadRoot { value: node.value });
            }
            if lowest.map_or(true, |low| node.value < low) {
                lowest = Some(node.value);
            }
        }

        match (self.min.and_then(|min| self.arena.get(min)), lowest) {
            (None, None) if self.min.is_none() => {}
            (Some(min), Some(low)) if min.is_root() && min.value == low => {}
            _ => return Err(InvariantViolation::StaleMinimum),
        }

        let mut stack: Vec<NodeKey> = self.roots.iter(&self.arena).collect();
        let mut reachable = 0;
        while let Some(key) = stack.pop() {
            reachable += 1;
            let node = &self.arena[key];
            check_list(&self.arena, &node.children)?;

            for child_key in node.children.iter(&self.arena) {
                let child = &self.arena[child_key];
                if child.parent != Some(key) {
                    return Err(InvariantViolation::BadParent { value: child.value });
                }
                if child.value < node.value {
                    return Err(InvariantViolation::HeapOrder {
                        parent: node.value,
                        child: child.value,
                    });
                }
                stack.push(child_key);
            }
        }

        if reachable != self.len() {
            return Err(InvariantViolation::CountMismatch {
                reachable,
                cached: self.len(),
            });
        }
        Ok(())
    }

    /// Whether [`validate`](Self::validate) passes
    pub fn check_heap(&self) -> bool {
        self.validate().is_ok()
    }

    /// Visits every reachable node and returns how many there were
    fn descend(&self, mut visit: impl FnMut(&Node<T>)) -> usize {
        let mut stack: Vec<NodeKey> = self.roots.iter(&self.arena).collect();
        let mut count = 0;
        while let Some(key) = stack.pop() {
            let node = &self.arena[key];
            visit(node);
            count += 1;
            stack.extend(node.children.iter(&self.arena));
        }
        count
    }
}
