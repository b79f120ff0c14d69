//! Arena storage for heap nodes
//!
//! Nodes live in a [`slotmap`] arena and refer to each other by [`NodeKey`]
//! instead of by pointer. Parent links and list back-links are plain keys with
//! no ownership attached, so the parent/child/sibling cycles of the heap never
//! turn into reference-counting cycles.
//!
//! # Segments
//!
//! An [`Arena`] is a set of *segments*, each one a `SlotMap` tagged with a
//! process-unique [`SegmentId`]. New nodes always go into the arena's home
//! segment. Merging two arenas moves the donor's segments over wholesale
//! instead of re-inserting its nodes, which is what lets a heap merge run in
//! time independent of the donor's size while every key handed out by either
//! side stays valid.
//!
//! Slot keys are generational: a key whose node has been removed (or that was
//! issued by an unrelated arena) simply fails to resolve, which is how stale
//! heap handles are detected.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of a node within one segment
    pub struct SlotKey;
}

/// Identity of one arena segment, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(u64);

static NEXT_SEGMENT: AtomicU64 = AtomicU64::new(0);

impl SegmentId {
    fn fresh() -> Self {
        SegmentId(NEXT_SEGMENT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Stable address of a node inside an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    segment: SegmentId,
    slot: SlotKey,
}

/// Segmented slot-map arena
#[derive(Debug)]
pub struct Arena<N> {
    home_id: SegmentId,
    home: SlotMap<SlotKey, N>,
    foreign: FxHashMap<SegmentId, SlotMap<SlotKey, N>>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    /// Creates an empty arena with a fresh home segment
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena whose home segment can hold `capacity` nodes
    /// without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            home_id: SegmentId::fresh(),
            home: SlotMap::with_capacity_and_key(capacity),
            foreign: FxHashMap::default(),
            len: 0,
        }
    }

    /// Number of live nodes across all segments
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of segments currently held, the home segment included
    pub fn segment_count(&self) -> usize {
        1 + self.foreign.len()
    }

    /// Stores `node` in the home segment
    pub fn insert(&mut self, node: N) -> NodeKey {
        let slot = self.home.insert(node);
        self.len += 1;
        NodeKey {
            segment: self.home_id,
            slot,
        }
    }

    /// Removes and returns the node at `key`, if it is still live
    ///
    /// A foreign segment that becomes empty is dropped so lookups keep
    /// hitting a small map.
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        let node = if key.segment == self.home_id {
            self.home.remove(key.slot)?
        } else {
            let segment = self.foreign.get_mut(&key.segment)?;
            let node = segment.remove(key.slot)?;
            if segment.is_empty() {
                self.foreign.remove(&key.segment);
            }
            node
        };
        self.len -= 1;
        Some(node)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&N> {
        if key.segment == self.home_id {
            self.home.get(key.slot)
        } else {
            self.foreign.get(&key.segment)?.get(key.slot)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut N> {
        if key.segment == self.home_id {
            self.home.get_mut(key.slot)
        } else {
            self.foreign.get_mut(&key.segment)?.get_mut(key.slot)
        }
    }

    /// Whether `key` still resolves to a live node
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.get(key).is_some()
    }

    /// Takes ownership of every segment of `other` and returns how many
    /// segment entries had to be re-inserted
    ///
    /// Keys issued by `other` resolve in `self` afterwards. The larger of the
    /// two foreign maps is kept and the smaller one is poured into it, so a
    /// segment only moves when the map holding it is at most half the size of
    /// the result. Each segment therefore moves O(log s) times over any
    /// sequence of absorbs, `s` being the total number of segments, and no
    /// absorb touches individual nodes.
    pub fn absorb(&mut self, other: Arena<N>) -> usize {
        let Arena {
            home_id,
            home,
            mut foreign,
            len,
        } = other;

        if foreign.len() > self.foreign.len() {
            std::mem::swap(&mut self.foreign, &mut foreign);
        }
        let mut moved = 0;
        if !home.is_empty() {
            debug_assert!(home_id != self.home_id && !self.foreign.contains_key(&home_id));
            self.foreign.insert(home_id, home);
            moved += 1;
        }
        for (id, segment) in foreign {
            debug_assert!(id != self.home_id && !self.foreign.contains_key(&id));
            self.foreign.insert(id, segment);
            moved += 1;
        }
        self.len += len;
        moved
    }

    /// Drops every node; the home segment keeps its allocation
    pub fn clear(&mut self) {
        self.home.clear();
        self.foreign.clear();
        self.len = 0;
    }
}

impl<N> Index<NodeKey> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        match self.get(key) {
            Some(node) => node,
            None => panic!("stale node key {key:?}"),
        }
    }
}

impl<N> IndexMut<NodeKey> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        match self.get_mut(key) {
            Some(node) => node,
            None => panic!("stale node key {key:?}"),
        }
    }
}
