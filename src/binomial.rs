//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert (O(1) amortized) and extract-min
//! - O(log n) union
//!
//! # Algorithm Overview
//!
//! A binomial heap keeps its trees in a slot array indexed by rank, where:
//! - Each tree satisfies the heap property
//! - At most one tree of each rank (0, 1, 2, ..., log n)
//! - This is analogous to the binary representation of n: slot `i` is
//!   occupied exactly when bit `i` of `len` is set
//!
//! **Key Operations**:
//! - **Union**: O(log n) - walk both slot arrays rank by rank, linking equal-rank
//!   trees and carrying the result upward (binary addition with carry)
//! - **Insert**: union with a single-node heap (binary increment)
//! - **Extract-min**: find the smallest root, detach its tree, and union the
//!   tree's children (a complete forest of ranks 0..r-1) back in
//!
//! Every structural change goes through [`BinomialHeap::union`]. Trees are
//! moved between heaps by value, so a tree is owned by exactly one slot at a
//! time and the heap a union drains is left empty.
//!
//! # Example
//!
//! ```rust
//! use rust_binomial_heap::BinomialHeap;
//!
//! let mut heap = BinomialHeap::empty();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value);
//! }
//! assert_eq!(heap.size(), 6);
//! assert_eq!(heap.ranks().collect::<Vec<_>>(), vec![1, 2]);
//!
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(2));
//! assert_eq!(heap.size(), 4);
//! ```

use crate::rank::Rank;
use crate::traits::{EmptyHeapError, Heap, MergeableHeap};
use crate::tree::BinomialTree;
use log::trace;
use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Number of rank slots stored inline before the slot array spills to the heap
///
/// Heaps with fewer than 2⁸ elements never allocate for their slot array.
pub const INLINE_SLOTS: usize = 8;

/// One rank position of the forest
type Slot<T> = Option<BinomialTree<T>>;

/// Slot array indexed by rank
type Slots<T> = SmallVec<[Slot<T>; INLINE_SLOTS]>;

/// Carry threaded through [`BinomialHeap::union`], one transition per rank
///
/// `Carry` always holds a tree whose rank equals the rank being visited.
enum CarryState<T> {
    NoCarry,
    Carry(BinomialTree<T>),
}

/// Binomial Heap
///
/// A min-heap: [`extract_min`](BinomialHeap::extract_min) returns values in
/// non-decreasing order.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::{BinomialHeap, EmptyHeapError};
///
/// let mut heap: BinomialHeap<i32> = [4, 2, 7].into_iter().collect();
/// assert_eq!(heap.extract_min(), Ok(2));
/// assert_eq!(heap.extract_min(), Ok(4));
/// assert_eq!(heap.extract_min(), Ok(7));
/// assert_eq!(heap.extract_min(), Err(EmptyHeapError));
/// ```
pub struct BinomialHeap<T: Ord> {
    /// Binomial trees indexed by rank. Each slot holds at most one tree, and
    /// the last slot is always occupied (no trailing empty slots).
    trees: Slots<T>,
    /// Number of elements in the heap
    len: usize,
}

impl<T: Ord> BinomialHeap<T> {
    /// Creates a heap with no elements
    pub fn empty() -> Self {
        Self {
            trees: SmallVec::new(),
            len: 0,
        }
    }

    /// Creates a heap holding exactly one tree, at the slot of its rank
    pub fn singleton(tree: BinomialTree<T>) -> Self {
        let rank = usize::from(tree.rank());
        let len = tree.size();

        let mut trees: Slots<T> = SmallVec::with_capacity(rank + 1);
        trees.resize_with(rank, || None);
        trees.push(Some(tree));

        let heap = Self { trees, len };
        heap.check_invariants();
        heap
    }

    /// Creates a heap from a complete forest of ranks `0..k`
    ///
    /// Tree `i` is placed at slot `i`, giving a heap of `2^k - 1` elements.
    /// This is exactly the shape of the children of a removed rank-`k` root.
    ///
    /// # Panics
    ///
    /// Panics if tree `i` does not have rank `i`.
    pub fn from_forest(forest: Vec<BinomialTree<T>>) -> Self {
        let mut len = 0;
        let mut trees: Slots<T> = SmallVec::with_capacity(forest.len());
        for (index, tree) in forest.into_iter().enumerate() {
            assert_eq!(
                usize::from(tree.rank()),
                index,
                "from_forest expects tree i to have rank i"
            );
            len += tree.size();
            trees.push(Some(tree));
        }

        let heap = Self { trees, len };
        heap.check_invariants();
        heap
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.trees.clear();
        self.len = 0;
    }

    /// Iterates over the occupied ranks in ascending order
    ///
    /// Read as bit positions, the occupied ranks spell out `size()` in binary.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.trees().map(BinomialTree::rank)
    }

    /// Iterates over the trees of the forest in ascending rank order
    pub fn trees(&self) -> impl Iterator<Item = &BinomialTree<T>> + '_ {
        self.trees.iter().flatten()
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: This is binary addition with carry propagation over the
    /// two slot arrays. At each rank there are up to three trees of that rank:
    /// ours, theirs, and the carry from the rank below.
    /// - none: the slot stays empty
    /// - one: it takes the slot, no carry
    /// - two: they are linked into a carry of rank + 1, the slot stays empty
    /// - three: the carry takes the slot, ours and theirs become the new carry
    ///
    /// A carry left over after the longer slot array ends lands in a new slot
    /// one rank above it.
    ///
    /// If either heap is empty the slot arrays are swapped without visiting
    /// any rank.
    pub fn union(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            mem::swap(&mut self.trees, &mut other.trees);
            self.len = mem::take(&mut other.len);
            other.trees.clear();
            return;
        }

        let width = self.trees.len().max(other.trees.len());
        self.trees.resize_with(width, || None);

        let mut carry = CarryState::NoCarry;
        let mut links = 0usize;

        for rank in 0..width {
            let ours = self.trees[rank].take();
            let theirs = other.trees.get_mut(rank).and_then(Option::take);

            let (slot, next) = match (ours, theirs, carry) {
                (None, None, CarryState::NoCarry) => (None, CarryState::NoCarry),
                (Some(tree), None, CarryState::NoCarry)
                | (None, Some(tree), CarryState::NoCarry)
                | (None, None, CarryState::Carry(tree)) => (Some(tree), CarryState::NoCarry),
                (Some(a), Some(b), CarryState::NoCarry)
                | (Some(a), None, CarryState::Carry(b))
                | (None, Some(a), CarryState::Carry(b)) => {
                    links += 1;
                    (None, CarryState::Carry(BinomialTree::merge_two(a, b)))
                }
                (Some(a), Some(b), CarryState::Carry(c)) => {
                    links += 1;
                    (Some(c), CarryState::Carry(BinomialTree::merge_two(a, b)))
                }
            };

            debug_assert!(slot
                .as_ref()
                .map_or(true, |tree| usize::from(tree.rank()) == rank));
            self.trees[rank] = slot;
            carry = next;
        }

        if let CarryState::Carry(tree) = carry {
            debug_assert_eq!(usize::from(tree.rank()), width);
            self.trees.push(Some(tree));
        }

        trace!(
            "union: {} + {} elements over {} ranks, {} links",
            self.len,
            other.len,
            width,
            links
        );

        self.len += other.len;
        other.len = 0;
        other.trees.clear();

        self.check_invariants();
    }

    /// Inserts a value
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized
    ///
    /// Builds a single-node heap and unions it in. The carries this causes are
    /// exactly the carries of incrementing `len` in binary.
    pub fn insert(&mut self, value: T) {
        let mut single = Self::singleton(BinomialTree::new(value));
        self.union(&mut single);
    }

    /// Returns the smallest value without removing it
    ///
    /// **Time Complexity**: O(log n) - scans the roots
    pub fn peek(&self) -> Option<&T> {
        self.min_rank().and_then(|rank| {
            self.trees[rank]
                .as_ref()
                .map(BinomialTree::root_value)
        })
    }

    /// Removes and returns the smallest value
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum (first in ascending rank on ties)
    /// 2. Take that tree out of its slot
    /// 3. Split off its root; the children form a complete forest of
    ///    ranks 0..r-1, which becomes a side heap
    /// 4. Union the side heap back in
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeapError`] if the heap holds no elements. The heap is
    /// left untouched in that case.
    pub fn extract_min(&mut self) -> Result<T, EmptyHeapError> {
        let rank = self.min_rank().ok_or(EmptyHeapError)?;
        let tree = self.trees[rank].take().ok_or(EmptyHeapError)?;
        trace!("extract_min: minimum root at rank {}", rank);

        self.len -= tree.size();
        self.trim_trailing_slots();

        let (value, children) = tree.decompose();
        let mut side = Self::from_forest(children);
        self.union(&mut side);

        self.check_invariants();
        Ok(value)
    }

    /// Consumes the heap, returning its values in non-decreasing order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap into an iterator that extracts the minimum each step
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }

    /// Renders the forest: the size, then each tree's rank and pre-order values
    ///
    /// ```rust
    /// use rust_binomial_heap::BinomialHeap;
    ///
    /// let heap: BinomialHeap<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(
    ///     heap.to_debug_string(),
    ///     "Heap size: 3\nTree rank: 0\n2\nTree rank: 1\n1 3\n"
    /// );
    /// ```
    pub fn to_debug_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Finds the slot holding the smallest root
    fn min_rank(&self) -> Option<usize> {
        let mut best: Option<(usize, &T)> = None;
        for (rank, slot) in self.trees.iter().enumerate() {
            if let Some(tree) = slot {
                let value = tree.root_value();
                match best {
                    Some((_, min)) if min <= value => {}
                    _ => best = Some((rank, value)),
                }
            }
        }
        best.map(|(rank, _)| rank)
    }

    /// Drops empty slots above the highest occupied rank
    fn trim_trailing_slots(&mut self) {
        while matches!(self.trees.last(), Some(None)) {
            self.trees.pop();
        }
    }

    /// Verifies the structural invariants
    ///
    /// - slot `i` holds a tree of rank `i`
    /// - occupied ranks, read as bits, equal `len`
    /// - the last slot is occupied
    ///
    /// These are O(log n). With the `invariant-checks` feature every tree is
    /// also walked to check its shape and heap order, which is O(n).
    #[cfg(any(debug_assertions, feature = "invariant-checks"))]
    fn check_invariants(&self) {
        let mut bits = 0usize;
        for (index, slot) in self.trees.iter().enumerate() {
            if let Some(tree) = slot {
                assert_eq!(
                    usize::from(tree.rank()),
                    index,
                    "tree of rank {} stored in slot {}",
                    tree.rank(),
                    index
                );
                bits |= crate::rank::tree_size(tree.rank());
            }
        }
        assert_eq!(
            bits, self.len,
            "occupied ranks do not match len: ranks spell {} but len is {}",
            bits, self.len
        );
        assert!(
            !matches!(self.trees.last(), Some(None)),
            "trailing empty slot"
        );

        if cfg!(feature = "invariant-checks") {
            for tree in self.trees() {
                assert!(
                    tree.is_well_formed(),
                    "malformed tree of rank {}",
                    tree.rank()
                );
            }
        }
    }

    #[cfg(not(any(debug_assertions, feature = "invariant-checks")))]
    #[inline]
    fn check_invariants(&self) {}
}

impl<T: Ord> Heap<T> for BinomialHeap<T> {
    fn new() -> Self {
        Self::empty()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, value: T) {
        self.insert(value);
    }

    fn peek(&self) -> Option<&T> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }
}

impl<T: Ord> MergeableHeap<T> for BinomialHeap<T> {
    fn merge(&mut self, mut other: Self) {
        self.union(&mut other);
    }
}

impl<T: Ord> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> Extend<T> for BinomialHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::empty();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("ranks", &self.ranks().collect::<Vec<_>>())
            .finish()
    }
}

/// Same layout as [`BinomialHeap::to_debug_string`]
impl<T: Ord + fmt::Display> fmt::Display for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heap size: {}", self.len)?;
        for tree in self.trees() {
            writeln!(f, "Tree rank: {}", tree.rank())?;
            for (i, value) in tree.values().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator returned by [`BinomialHeap::into_iter_sorted`]
pub struct IntoIterSorted<T: Ord> {
    heap: BinomialHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len, Some(self.heap.len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(heap: &BinomialHeap<i32>) -> Vec<Rank> {
        heap.ranks().collect()
    }

    #[test]
    fn test_empty() {
        let mut heap: BinomialHeap<i32> = BinomialHeap::empty();
        assert!(heap.is_empty());
        assert_eq!(heap.size(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.extract_min(), Err(EmptyHeapError));
        assert_eq!(heap.size(), 0);
        assert!(occupied(&heap).is_empty());
    }

    #[test]
    fn test_singleton_places_tree_at_its_rank() {
        let tree = BinomialTree::merge_two(
            BinomialTree::merge_two(BinomialTree::new(4), BinomialTree::new(2)),
            BinomialTree::merge_two(BinomialTree::new(3), BinomialTree::new(1)),
        );
        let heap = BinomialHeap::singleton(tree);
        assert_eq!(heap.size(), 4);
        assert_eq!(occupied(&heap), vec![2]);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_from_forest() {
        let forest = vec![
            BinomialTree::new(9),
            BinomialTree::merge_two(BinomialTree::new(5), BinomialTree::new(6)),
        ];
        let heap = BinomialHeap::from_forest(forest);
        assert_eq!(heap.size(), 3);
        assert_eq!(occupied(&heap), vec![0, 1]);
        assert_eq!(heap.into_sorted_vec(), vec![5, 6, 9]);

        let empty: BinomialHeap<i32> = BinomialHeap::from_forest(Vec::new());
        assert!(empty.is_empty());
    }

    #[test]
    #[should_panic(expected = "tree i to have rank i")]
    fn test_from_forest_rejects_gaps() {
        let forest = vec![BinomialTree::merge_two(
            BinomialTree::new(1),
            BinomialTree::new(2),
        )];
        let _ = BinomialHeap::from_forest(forest);
    }

    #[test]
    fn test_insert_follows_binary_increment() {
        let mut heap = BinomialHeap::empty();
        for n in 1..=64i32 {
            heap.insert(n);
            let expected: Vec<Rank> = (0..8u8).filter(|bit| n & (1 << bit) != 0).collect();
            assert_eq!(occupied(&heap), expected, "after {} inserts", n);
        }
    }

    #[test]
    fn test_union_with_empty_is_identity() {
        let mut heap: BinomialHeap<i32> = [3, 1, 2].into_iter().collect();
        let mut empty = BinomialHeap::empty();
        heap.union(&mut empty);
        assert_eq!(heap.size(), 3);
        assert_eq!(occupied(&heap), vec![0, 1]);

        let mut target = BinomialHeap::empty();
        target.union(&mut heap);
        assert_eq!(target.size(), 3);
        assert!(heap.is_empty());
        assert!(occupied(&heap).is_empty());
        assert_eq!(target.into_sorted_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_union_carry_through_all_three_occupied() {
        // 3 (0b11) + 3 (0b11) = 6 (0b110): rank 1 sees ours, theirs and a carry
        let mut a: BinomialHeap<i32> = [10, 20, 30].into_iter().collect();
        let mut b: BinomialHeap<i32> = [15, 25, 5].into_iter().collect();
        a.union(&mut b);
        assert_eq!(a.size(), 6);
        assert_eq!(occupied(&a), vec![1, 2]);
        assert!(b.is_empty());
        assert_eq!(a.into_sorted_vec(), vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_union_carry_past_longer_operand() {
        // 7 (0b111) + 1 = 8 (0b1000): carry runs off the end
        let mut a: BinomialHeap<i32> = (0..7).collect();
        let mut b: BinomialHeap<i32> = std::iter::once(-1).collect();
        a.union(&mut b);
        assert_eq!(occupied(&a), vec![3]);
        assert_eq!(a.peek(), Some(&-1));
    }

    #[test]
    fn test_union_shorter_self() {
        // 1 + 12 (0b1100) = 13 (0b1101)
        let mut a: BinomialHeap<i32> = std::iter::once(100).collect();
        let mut b: BinomialHeap<i32> = (0..12).collect();
        a.union(&mut b);
        assert_eq!(a.size(), 13);
        assert_eq!(occupied(&a), vec![0, 2, 3]);
    }

    #[test]
    fn test_extract_min_trims_slots() {
        let mut heap: BinomialHeap<i32> = (0..8).collect();
        assert_eq!(occupied(&heap), vec![3]);
        assert_eq!(heap.extract_min(), Ok(0));
        assert_eq!(occupied(&heap), vec![0, 1, 2]);
        assert_eq!(heap.trees.len(), 3);
    }

    #[test]
    fn test_extract_min_prefers_lowest_rank_on_ties() {
        // rank 0 holds a 1 and rank 1 holds a tree rooted at 1
        let mut heap: BinomialHeap<i32> = [1, 2, 1].into_iter().collect();
        assert_eq!(occupied(&heap), vec![0, 1]);
        assert_eq!(heap.min_rank(), Some(0));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(occupied(&heap), vec![1]);
    }

    #[test]
    fn test_to_debug_string_empty() {
        let heap: BinomialHeap<i32> = BinomialHeap::empty();
        assert_eq!(heap.to_debug_string(), "Heap size: 0\n");
    }

    /// Sink that rejects writes once `budget` bytes have been taken
    struct Bounded {
        written: String,
        budget: usize,
    }

    impl fmt::Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.written.len() + s.len() > self.budget {
                return Err(fmt::Error);
            }
            self.written.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_display_matches_debug_string() {
        let heap: BinomialHeap<i32> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        assert_eq!(format!("{}", heap), heap.to_debug_string());
        assert!(heap.to_debug_string().starts_with("Heap size: 6\nTree rank: 1\n"));
    }

    #[test]
    fn test_display_propagates_write_errors() {
        use std::fmt::Write as _;

        let heap: BinomialHeap<i32> = (0..7).collect();
        let full = heap.to_debug_string();

        let mut sink = Bounded { written: String::new(), budget: full.len() };
        assert!(write!(sink, "{}", heap).is_ok());
        assert_eq!(sink.written, full);

        // cut off mid-forest: the error must surface instead of being dropped
        let mut sink = Bounded { written: String::new(), budget: full.len() / 2 };
        assert_eq!(write!(sink, "{}", heap), Err(fmt::Error));
        assert!(sink.written.len() <= full.len() / 2);
    }

    #[test]
    fn test_debug_format() {
        let heap: BinomialHeap<i32> = (0..5).collect();
        assert_eq!(
            format!("{:?}", heap),
            "BinomialHeap { len: 5, ranks: [0, 2] }"
        );
    }

    #[test]
    fn test_into_iter_sorted_size_hint() {
        let heap: BinomialHeap<i32> = [4, 4, 1, 9].into_iter().collect();
        let mut iter = heap.into_iter_sorted();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![4, 4, 9]);
    }

    #[test]
    fn test_clear() {
        let mut heap: BinomialHeap<i32> = (0..10).collect();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        heap.insert(3);
        assert_eq!(heap.extract_min(), Ok(3));
    }
}
