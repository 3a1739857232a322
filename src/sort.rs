//! Heap sort on top of [`BinomialHeap`]
//!
//! Inserts every value, then extracts the minimum until the heap is empty.
//! O(n log n) comparisons; not stable (equal values may come out in any order).

use crate::binomial::BinomialHeap;

/// Sorts `values` into non-decreasing order using a binomial heap
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::sort::heap_sort;
///
/// assert_eq!(heap_sort(vec![5, -3, 8, 1, 8, 0]), vec![-3, 0, 1, 5, 8, 8]);
/// assert_eq!(heap_sort(Vec::<i32>::new()), Vec::<i32>::new());
/// ```
pub fn heap_sort<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<BinomialHeap<T>>().into_sorted_vec()
}

/// Returns true if `values` is in non-decreasing order
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
