//! Error types for heap operations
//!
//! Every error here is a precondition violation reported to the caller. No
//! operation retries internally, and a rejected call leaves the heap exactly
//! as it was: validation always runs before any node is touched.

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// `peek_min` or `extract_min` was called on a heap with no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// The value is reserved (negative infinity or NaN), or a `decrease_key`
    /// request would raise the key instead of lowering it
    #[error("invalid value for this operation")]
    InvalidValue,
    /// The handle refers to a node that was extracted, deleted, or never
    /// belonged to this heap
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
}

/// A structural invariant that [`FibonacciHeap::validate`] found broken
///
/// These can only appear through a bug in the heap itself; they are exposed
/// so tests and debug assertions can say *which* invariant failed.
///
/// [`FibonacciHeap::validate`]: crate::FibonacciHeap::validate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    /// Reachable node count differs from the cached count
    #[error("reachable node count {reachable} does not match cached count {cached}")]
    CountMismatch { reachable: usize, cached: usize },
    /// A child's value is below its parent's
    #[error("child value {child} is below parent value {parent}")]
    HeapOrder { parent: f64, child: f64 },
    /// A top-level node carries a mark or a parent link
    #[error("root with value {value} is marked or has a parent")]
    BadRoot { value: f64 },
    /// A child's parent link does not point at the node owning its list
    #[error("node with value {value} has a stale parent link")]
    BadParent { value: f64 },
    /// The cached minimum is missing, stale, or not the lowest root
    #[error("cached minimum does not reference the lowest root")]
    StaleMinimum,
    /// A node list's stored length disagrees with its forward traversal
    #[error("node list length {stored} does not match traversal length {walked}")]
    ListLength { stored: usize, walked: usize },
}
