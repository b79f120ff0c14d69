//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert, decrease_key, merge, and find-min
//! - O(log n) amortized extract_min and delete
//!
//! The structure is a forest of heap-ordered trees. Roots sit in a top-level
//! [`NodeList`]; each node owns the list of its children. Work is deferred:
//! insert and merge only append roots, and the forest is tidied up by
//! consolidation when the minimum is extracted. Decrease-key cuts a node that
//! violates heap order out to the top level, and the mark/cascading-cut rule
//! keeps every tree's degree logarithmic in its size.
//!
//! Nodes live in a segmented [`Arena`]; handles are generational keys into it,
//! so a handle to an extracted node is rejected instead of dangling.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{HeapConfig, MinRefresh};
use crate::error::HeapError;
use crate::node_list::{Node, NodeList};
use crate::storage::{Arena, NodeKey};

/// Key reserved for deletion: lower than every value a caller may store
const DELETED: f64 = f64::NEG_INFINITY;

#[inline]
fn is_storable(value: f64) -> bool {
    !value.is_nan() && value != DELETED
}

/// Handle to an element in a Fibonacci heap
///
/// Handles stay valid across [`FibonacciHeap::merge`], in both directions: a
/// handle from the donor heap addresses the same element in the merged heap.
/// Once the element is extracted or deleted the handle is rejected with
/// [`HeapError::InvalidHandle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FibonacciHandle {
    pub(crate) node: NodeKey,
}

/// Fibonacci Heap keyed by `f64`
///
/// # Example
///
/// ```rust
/// use fibo_heap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5.0, "item").unwrap();
/// heap.insert(3.0, "other").unwrap();
/// heap.decrease_key(&handle, 1.0).unwrap();
/// assert_eq!(heap.peek_min(), Ok(1.0));
/// assert_eq!(heap.extract_min(), Ok("item"));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<T> {
    pub(crate) arena: Arena<Node<T>>,
    pub(crate) roots: NodeList,
    pub(crate) min: Option<NodeKey>,
    config: HeapConfig,
}

impl<T> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FibonacciHeap<T> {
    /// Creates an empty heap with the default configuration
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            arena: Arena::with_capacity(config.capacity),
            roots: NodeList::new(),
            min: None,
            config,
        }
    }

    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Returns true if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Same as [`len`](Self::len)
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Number of trees in the top-level forest
    #[inline]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Inserts `payload` with key `value` as a new single-node tree
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidValue`] for negative infinity, which is
    /// reserved for deletion, and for NaN, which has no place in a total
    /// order.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, value: f64, payload: T) -> Result<FibonacciHandle, HeapError> {
        if !is_storable(value) {
            return Err(HeapError::InvalidValue);
        }

        let node = self.arena.insert(Node::new(value, payload));
        self.roots.insert(&mut self.arena, node);

        if self.min.map_or(true, |min| value < self.arena[min].value) {
            self.min = Some(node);
        }
        Ok(FibonacciHandle { node })
    }

    /// Returns the minimum key without modifying the heap
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    pub fn peek_min(&self) -> Result<f64, HeapError> {
        self.min
            .map(|min| self.arena[min].value)
            .ok_or(HeapError::EmptyHeap)
    }

    /// Returns the minimum key and its payload, or `None` if empty
    pub fn peek(&self) -> Option<(f64, &T)> {
        self.min.map(|min| {
            let node = &self.arena[min];
            (node.value, &node.payload)
        })
    }

    /// Removes the minimum element and returns its payload
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.remove_min()
            .map(|(_, payload)| payload)
            .ok_or(HeapError::EmptyHeap)
    }

    /// Removes the minimum element and returns its key and payload, or `None`
    /// if empty
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.remove_min()
    }

    /// Lowers the key of the element behind `handle` to `value`
    ///
    /// Setting a key equal to the current one is accepted.
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element is no longer in the heap.
    /// - [`HeapError::InvalidValue`] if `value` is greater than the current
    ///   key, is NaN, or is negative infinity.
    ///
    /// The heap is untouched when an error is returned.
    ///
    /// # Time Complexity
    /// O(1) amortized with [`MinRefresh::Incremental`]; the default
    /// [`MinRefresh::Rescan`] adds a pass over the top-level roots.
    pub fn decrease_key(&mut self, handle: &FibonacciHandle, value: f64) -> Result<(), HeapError> {
        let node = self
            .arena
            .get(handle.node)
            .ok_or(HeapError::InvalidHandle)?;
        if !is_storable(value) || value > node.value {
            return Err(HeapError::InvalidValue);
        }

        self.lower_key(handle.node, value);
        Ok(())
    }

    /// Removes the element behind `handle` and returns its payload
    ///
    /// The element's key is lowered to a reserved sentinel below every
    /// storable value, which makes it the minimum, and then the minimum is
    /// extracted.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if the element is no longer in the
    /// heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete(&mut self, handle: &FibonacciHandle) -> Result<T, HeapError> {
        if !self.arena.contains(handle.node) {
            return Err(HeapError::InvalidHandle);
        }

        self.lower_key(handle.node, DELETED);
        debug_assert_eq!(self.min, Some(handle.node));
        let (_, payload) = self.remove_min().ok_or(HeapError::EmptyHeap)?;
        debug!(remaining = self.len(), "deleted node");
        Ok(payload)
    }

    /// Merges another heap into this one, consuming the other heap
    ///
    /// The other heap's roots are spliced onto this heap's forest and its
    /// arena segments are adopted, so handles issued by either heap remain
    /// usable on the result.
    ///
    /// # Time Complexity
    /// O(1) amortized. No element is touched; only arena segments (one per
    /// heap ever merged in) change hands, the smaller set moving into the
    /// larger, so each segment moves O(log m) times across `m` merges.
    pub fn merge(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }

        let FibonacciHeap {
            arena,
            roots,
            min: other_min,
            ..
        } = other;
        let donated = arena.len();

        let moved = self.arena.absorb(arena);
        self.roots.merge(&mut self.arena, roots);

        if let Some(other_min) = other_min {
            let lower = self
                .min
                .map_or(true, |min| self.arena[other_min].value < self.arena[min].value);
            if lower {
                self.min = Some(other_min);
            }
        }
        debug!(
            donated,
            moved,
            segments = self.arena.segment_count(),
            total = self.len(),
            roots = self.roots.len(),
            "merged heap"
        );
    }

    /// Whether `handle` still refers to an element of this heap
    pub fn contains(&self, handle: &FibonacciHandle) -> bool {
        self.arena.contains(handle.node)
    }

    /// Current key of the element behind `handle`
    pub fn value(&self, handle: &FibonacciHandle) -> Result<f64, HeapError> {
        self.arena
            .get(handle.node)
            .map(|node| node.value)
            .ok_or(HeapError::InvalidHandle)
    }

    pub fn payload(&self, handle: &FibonacciHandle) -> Result<&T, HeapError> {
        self.arena
            .get(handle.node)
            .map(|node| &node.payload)
            .ok_or(HeapError::InvalidHandle)
    }

    pub fn payload_mut(&mut self, handle: &FibonacciHandle) -> Result<&mut T, HeapError> {
        self.arena
            .get_mut(handle.node)
            .map(|node| &mut node.payload)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Drops every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.arena.clear();
        self.roots = NodeList::new();
        self.min = None;
    }

    fn remove_min(&mut self) -> Option<(f64, T)> {
        let min = self.min?;
        self.roots.remove(&mut self.arena, min);

        // Children become roots: roots have no parent and are never marked
        let children = std::mem::take(&mut self.arena[min].children);
        let mut child = children.front();
        while let Some(key) = child {
            let node = &mut self.arena[key];
            node.parent = None;
            node.marked = false;
            child = node.next;
        }
        self.roots.merge(&mut self.arena, children);

        let node = self.arena.remove(min)?;
        self.consolidate();
        self.rescan_min();

        debug!(
            value = node.value,
            remaining = self.len(),
            roots = self.roots.len(),
            "extracted minimum"
        );
        Some((node.value, node.payload))
    }

    /// Links top-level trees of equal degree until every degree occurs at
    /// most once among the roots
    ///
    /// Roots are visited front to back. A root whose degree is already held
    /// by another root in the table is linked with it: the larger key becomes
    /// the child, and on equal keys the root being visited stays on top. The
    /// surviving root is re-examined at its new degree before the walk moves
    /// on.
    fn consolidate(&mut self) {
        let mut by_degree: SmallVec<[Option<NodeKey>; 32]> = SmallVec::new();
        let mut current = self.roots.front();

        while let Some(node) = current {
            let degree = self.arena[node].degree();
            if by_degree.len() <= degree {
                by_degree.resize(degree + 1, None);
            }

            match by_degree[degree].take() {
                Some(other) if other != node => {
                    let survivor = if self.arena[node].value <= self.arena[other].value {
                        self.link(other, node);
                        node
                    } else {
                        self.link(node, other);
                        other
                    };
                    current = Some(survivor);
                }
                _ => {
                    by_degree[degree] = Some(node);
                    current = self.arena[node].next;
                }
            }
        }
    }

    /// Moves root `child` under root `parent`
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        self.roots.remove(&mut self.arena, child);

        let node = &mut self.arena[child];
        node.parent = Some(parent);
        node.marked = false;
        self.with_children(parent, |children, arena| children.insert(arena, child));

        trace!(
            parent = self.arena[parent].value,
            child = self.arena[child].value,
            degree = self.arena[parent].degree(),
            "linked trees"
        );
    }

    /// Sets a key known to be no greater than the current one and restores
    /// heap order and the cached minimum
    fn lower_key(&mut self, key: NodeKey, value: f64) {
        let node = &mut self.arena[key];
        node.value = value;

        if let Some(parent) = node.parent {
            if value < self.arena[parent].value {
                self.cut(key);
                self.cascading_cut(parent);
            }
        }

        match self.config.min_refresh {
            MinRefresh::Rescan => self.rescan_min(),
            MinRefresh::Incremental => {
                let lower = self.arena[key].is_root()
                    && self.min.map_or(true, |min| value < self.arena[min].value);
                if lower {
                    self.min = Some(key);
                }
            }
        }
    }

    /// Detaches `key` from its parent and makes it an unmarked root
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.arena[key];
        let Some(parent) = node.parent.take() else {
            return;
        };
        node.marked = false;

        self.with_children(parent, |children, arena| children.remove(arena, key));
        self.roots.insert(&mut self.arena, key);

        trace!(value = self.arena[key].value, "cut node to top level");
    }

    /// Walks upward from `key`: marked non-roots are cut and the walk
    /// continues at their parent; the first unmarked non-root is marked and
    /// the walk stops. Roots end the walk without being marked.
    fn cascading_cut(&mut self, mut key: NodeKey) {
        while let Some(parent) = self.arena[key].parent {
            let node = &mut self.arena[key];
            if !node.marked {
                node.marked = true;
                trace!(value = node.value, "marked node");
                return;
            }
            self.cut(key);
            key = parent;
        }
    }

    fn rescan_min(&mut self) {
        let mut min: Option<(NodeKey, f64)> = None;
        for key in self.roots.iter(&self.arena) {
            let value = self.arena[key].value;
            if min.map_or(true, |(_, lowest)| value < lowest) {
                min = Some((key, value));
            }
        }
        self.min = min.map(|(key, _)| key);
    }

    /// Runs `f` on the children list of `owner`
    ///
    /// The list is moved out of the node for the duration so `f` can take the
    /// arena mutably.
    fn with_children<R>(
        &mut self,
        owner: NodeKey,
        f: impl FnOnce(&mut NodeList, &mut Arena<Node<T>>) -> R,
    ) -> R {
        let mut children = std::mem::take(&mut self.arena[owner].children);
        let result = f(&mut children, &mut self.arena);
        self.arena[owner].children = children;
        result
    }
}
