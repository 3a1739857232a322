//! Rank type and utilities for binomial trees.
//!
//! # Why u8?
//!
//! The rank of a binomial tree is the number of children of its root, and a
//! tree of rank `r` holds exactly `2^r` nodes. A heap of `n` elements never
//! holds a tree of rank above `log₂(n)`:
//! - 2⁶⁴ elements → max rank 63
//! - `u8` → ranks up to 255
//!
//! Since no addressable heap can get near rank 64, `u8` is more than enough,
//! and it keeps [`BinomialTree`](crate::tree::BinomialTree) handles small.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the limit is ever exceeded. With a valid
//! union algorithm that is mathematically impossible, so a panic means a bug.

/// Type alias for binomial tree rank.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since max rank is log₂(n) \
         and u8::MAX (255) supports heaps with up to 2²⁵⁵ elements",
    )
}

/// Number of nodes in a binomial tree of the given rank (`2^rank`).
///
/// # Panics
///
/// Panics if `2^rank` does not fit in a `usize`. Such a tree cannot exist in
/// memory, so this indicates corrupted rank bookkeeping.
///
/// ```rust
/// use rust_binomial_heap::rank::tree_size;
///
/// assert_eq!(tree_size(0), 1);
/// assert_eq!(tree_size(3), 8);
/// ```
#[inline]
pub fn tree_size(rank: Rank) -> usize {
    1usize
        .checked_shl(u32::from(rank))
        .expect("tree size overflow: rank exceeds the pointer width")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(127), 128);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_tree_size_powers_of_two() {
        for rank in 0..16u8 {
            assert_eq!(tree_size(rank), 1 << rank);
        }
        assert_eq!(tree_size(20), 1_048_576);
    }

    #[test]
    #[should_panic(expected = "tree size overflow")]
    fn test_tree_size_overflow() {
        tree_size(200);
    }

    #[test]
    fn test_rank_type_width() {
        assert_eq!(MAX_RANK, 255);
        assert_eq!(std::mem::size_of::<Rank>(), 1);
    }
}
