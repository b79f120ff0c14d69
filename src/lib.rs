//! Fibonacci heap keyed by `f64`
//!
//! This crate provides an arena-backed Fibonacci heap: a priority queue whose
//! elements carry an `f64` key and an arbitrary payload, with handles for
//! lowering keys and deleting elements after insertion.
//!
//! # Complexity
//!
//! - **insert**, **merge**, **peek_min**: O(1)
//! - **decrease_key**: O(1) amortized (see [`MinRefresh`])
//! - **extract_min**, **delete**: O(log n) amortized
//!
//! # Keys
//!
//! Keys are ordered with `<` on `f64`. Negative infinity is reserved for
//! internal use by [`FibonacciHeap::delete`] and NaN has no ordering, so both
//! are rejected with [`HeapError::InvalidValue`]. Positive infinity is an
//! ordinary key.
//!
//! # Example
//!
//! ```rust
//! use fibo_heap::{FibonacciHeap, HeapError};
//!
//! let mut heap = FibonacciHeap::new();
//! let handle1 = heap.insert(5.0, "item1").unwrap();
//! let _handle2 = heap.insert(3.0, "item2").unwrap();
//! heap.decrease_key(&handle1, 1.0).unwrap();
//! assert_eq!(heap.peek(), Some((1.0, &"item1")));
//!
//! assert_eq!(heap.decrease_key(&handle1, 9.0), Err(HeapError::InvalidValue));
//! assert_eq!(heap.extract_min(), Ok("item1"));
//! assert_eq!(heap.extract_min(), Ok("item2"));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! ```
//!
//! # Concurrency
//!
//! A heap is a plain single-threaded value: every operation runs to
//! completion and there is no internal locking. Wrap it in a mutex to share
//! it between threads.

pub mod config;
pub mod error;
pub mod fibonacci;
mod inspect;
pub mod node_list;
mod render;
pub mod storage;

pub use config::{HeapConfig, MinRefresh};
pub use error::{HeapError, InvariantViolation};
pub use fibonacci::{FibonacciHandle, FibonacciHeap};
