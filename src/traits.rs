//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for min-priority queues:
//!
//! - [`Heap`]: Base trait with the `BinaryHeap`-like push/peek/pop interface
//! - [`MergeableHeap`]: Extended trait adding `merge`, the operation binomial
//!   heaps are built around
//!
//! Unlike `std::collections::BinaryHeap`, every heap here is a min-heap and
//! the stored value is its own ordering key.

use std::fmt;

/// Error returned when extracting from a heap that holds no elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot extract from an empty heap")
    }
}

impl std::error::Error for EmptyHeapError {}

/// Base trait for min-heap data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::{BinomialHeap, Heap};
///
/// let mut heap: BinomialHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) worst case for binomial heaps, O(1) amortized.
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Heaps that can absorb another heap of the same type
///
/// ```rust
/// use rust_binomial_heap::{BinomialHeap, Heap, MergeableHeap};
///
/// let mut a: BinomialHeap<i32> = Heap::new();
/// a.push(4);
/// a.push(2);
///
/// let mut b: BinomialHeap<i32> = Heap::new();
/// b.push(3);
/// b.push(1);
///
/// a.merge(b);
/// assert_eq!(a.len(), 4);
/// assert_eq!(a.pop(), Some(1));
/// assert_eq!(a.pop(), Some(2));
/// ```
pub trait MergeableHeap<T: Ord>: Heap<T> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n) for binomial heaps.
    fn merge(&mut self, other: Self);
}
