//! Binomial Heap for Rust
//!
//! This crate provides a mergeable min-priority queue backed by a binomial
//! heap, and a heap sort built on it.
//!
//! # Features
//!
//! - **Binomial Tree**: a heap-ordered tree of 2ʳ nodes whose root has children
//!   of ranks 0..r-1, grown only by linking two trees of equal rank
//! - **Binomial Heap**: at most one tree per rank, mirroring the binary digits of
//!   the element count; O(log n) union, insert and extract-min
//! - **Heap sort**: insert everything, extract until empty
//!
//! # Example
//!
//! ```rust
//! use rust_binomial_heap::{BinomialHeap, EmptyHeapError};
//!
//! let mut heap = BinomialHeap::empty();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert_eq!(heap.size(), 3);
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(8));
//! assert_eq!(heap.extract_min(), Err(EmptyHeapError));
//! ```
//!
//! # Configuration
//!
//! Debug builds re-verify the slot/size invariants after every mutation
//! (O(log n) each). The `invariant-checks` feature enables them in release
//! builds too and additionally walks every tree to check shape and heap order.
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade at `trace`
//! level only and never installs a logger.

pub mod binomial;
pub mod rank;
pub mod sort;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{EmptyHeapError, Heap, MergeableHeap};
pub use tree::BinomialTree;
