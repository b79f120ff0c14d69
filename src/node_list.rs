//! Heap nodes and the sibling lists that own them
//!
//! A [`NodeList`] is the ordered container holding either the heap's
//! top-level forest or one node's children. The list itself is just
//! `front`/`back`/`len`; the links live in the nodes, which live in an
//! [`Arena`]. Every list operation therefore takes the arena it operates on.
//!
//! Traversal is forward-only ([`NodeList::iter`] or each node's `next`). Each node
//! also carries a `prev` link, but it is private to this module: it exists so
//! [`NodeList::remove`] can patch neighbours without scanning from the front,
//! and nothing outside the list may rely on it.

use crate::storage::{Arena, NodeKey};

/// One heap element
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: f64,
    pub(crate) payload: T,
    pub(crate) children: NodeList,
    /// Non-owning back-reference; `None` iff the node is a root
    pub(crate) parent: Option<NodeKey>,
    /// Set once a non-root node has lost a child since it was last linked
    pub(crate) marked: bool,
    pub(crate) next: Option<NodeKey>,
    prev: Option<NodeKey>,
}

impl<T> Node<T> {
    /// Creates an unlinked, unmarked root node with no children
    pub(crate) fn new(value: f64, payload: T) -> Self {
        Self {
            value,
            payload,
            children: NodeList::new(),
            parent: None,
            marked: false,
            next: None,
            prev: None,
        }
    }

    /// Number of direct children
    #[inline]
    pub(crate) fn degree(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Ordered sequence of sibling nodes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeList {
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    len: usize,
}

impl NodeList {
    pub const fn new() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }

    #[inline]
    pub fn front(&self) -> Option<NodeKey> {
        self.front
    }

    #[inline]
    pub fn back(&self) -> Option<NodeKey> {
        self.back
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `key` to the back of the list. O(1).
    ///
    /// The node's own sibling links are overwritten; it must not currently be
    /// a member of any list.
    pub fn insert<T>(&mut self, arena: &mut Arena<Node<T>>, key: NodeKey) {
        {
            let node = &mut arena[key];
            node.next = None;
            node.prev = self.back;
        }

        match self.back {
            Some(back) => arena[back].next = Some(key),
            None => self.front = Some(key),
        }
        self.back = Some(key);
        self.len += 1;
    }

    /// Splices all of `other` onto the back of this list. O(1).
    ///
    /// This is an unsorted splice. `other` is consumed; its nodes now belong
    /// to `self`.
    pub fn merge<T>(&mut self, arena: &mut Arena<Node<T>>, other: NodeList) {
        let (Some(other_front), Some(other_back)) = (other.front, other.back) else {
            return;
        };

        match self.back {
            Some(back) => {
                arena[back].next = Some(other_front);
                arena[other_front].prev = Some(back);
            }
            None => self.front = Some(other_front),
        }
        self.back = Some(other_back);
        self.len += other.len;
    }

    /// Unlinks `key` from this list and returns it
    ///
    /// Returns `None` without touching anything if the list is empty. The
    /// caller must guarantee `key` is a member of this exact list; removing a
    /// node that belongs to another list corrupts both.
    pub fn remove<T>(&mut self, arena: &mut Arena<Node<T>>, key: NodeKey) -> Option<NodeKey> {
        if self.len == 0 {
            return None;
        }

        let (prev, next) = {
            let node = &mut arena[key];
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(prev) => arena[prev].next = next,
            None => {
                if self.front == Some(key) {
                    self.front = next;
                }
            }
        }
        match next {
            Some(next) => arena[next].prev = prev,
            None => {
                if self.back == Some(key) {
                    self.back = prev;
                }
            }
        }

        self.len -= 1;
        Some(key)
    }

    /// Forward iterator over the keys in list order
    pub fn iter<'a, T>(&self, arena: &'a Arena<Node<T>>) -> Iter<'a, T> {
        Iter {
            arena,
            next: self.front,
            remaining: self.len,
        }
    }
}

/// Forward iterator over a [`NodeList`]
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let key = self.next?;
        self.next = self.arena[key].next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
