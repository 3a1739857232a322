//! Binomial trees
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees: the root with the larger key
//!   becomes the last child of the other root
//! - Bₖ has exactly 2ᵏ nodes, and its root has children B₀, B₁, ..., B_{k-1}
//!   in that order
//!
//! Nodes own their children directly (`Vec<Node<T>>`), so every node in a heap
//! has exactly one owner and a tree moves as a single value. There are no
//! parent pointers: without decrease-key nothing ever walks upward.

use crate::rank::{self, Rank};

/// Internal node structure
///
/// `children[i]` is the root of a rank-`i` subtree, so a node with `k`
/// children is the root of a Bₖ tree.
struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Node {
            value,
            children: Vec::new(),
        }
    }
}

/// A heap-ordered binomial tree together with its rank
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::BinomialTree;
///
/// let a = BinomialTree::new(3);
/// let b = BinomialTree::new(1);
/// let tree = BinomialTree::merge_two(a, b);
///
/// assert_eq!(tree.rank(), 1);
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.root_value(), &1);
/// ```
pub struct BinomialTree<T> {
    root: Node<T>,
    rank: Rank,
}

impl<T> BinomialTree<T> {
    /// Creates a rank-0 tree holding a single value
    pub fn new(value: T) -> Self {
        BinomialTree {
            root: Node::leaf(value),
            rank: 0,
        }
    }

    /// Returns the rank of this tree (number of children of the root)
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the number of values in this tree, always `2^rank`
    pub fn size(&self) -> usize {
        rank::tree_size(self.rank)
    }

    /// Returns the key stored at the root
    ///
    /// For a heap-ordered tree this is the smallest key in the tree.
    pub fn root_value(&self) -> &T {
        &self.root.value
    }

    /// Attaches `other` as the new last child of this tree's root
    ///
    /// **Time Complexity**: O(1) amortized (one `Vec::push`)
    ///
    /// This is the only operation that grows a tree. It does not look at the
    /// keys; use [`merge_two`](Self::merge_two) to keep heap order.
    ///
    /// # Panics
    ///
    /// Panics if the two trees do not have the same rank. Only the union
    /// algorithm links trees, and it only ever links trees of equal rank.
    pub fn merge_root(&mut self, other: Self) {
        assert_eq!(
            self.rank, other.rank,
            "merge_root called on binomial trees of different rank"
        );
        debug_assert_eq!(self.root.children.len(), usize::from(self.rank));

        self.root.children.push(other.root);
        self.rank = rank::checked_increment(self.rank);
    }

    /// Splits off the root, returning its value and the root's children
    ///
    /// **Time Complexity**: O(rank)
    ///
    /// The `i`-th returned tree has rank `i`, so the children of a rank-`r`
    /// tree form a complete binomial forest of ranks `0..r` holding
    /// `2^r - 1` values.
    pub fn decompose(self) -> (T, Vec<BinomialTree<T>>) {
        let Node { value, children } = self.root;
        let trees = children
            .into_iter()
            .enumerate()
            .map(|(rank, root)| {
                debug_assert_eq!(root.children.len(), rank);
                BinomialTree {
                    root,
                    // ranks are bounded by the parent's u8 rank
                    rank: rank as Rank,
                }
            })
            .collect();
        (value, trees)
    }

    /// Iterates over all values in the tree in pre-order
    ///
    /// The root comes first, followed by each child subtree in ascending
    /// rank order.
    pub fn values(&self) -> Values<'_, T> {
        Values {
            stack: vec![&self.root],
        }
    }
}

impl<T: Ord> BinomialTree<T> {
    /// Links two trees of equal rank into one tree of rank + 1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The tree whose root is smaller becomes the parent, which preserves heap
    /// order (parent <= child). On equal roots `a` becomes the parent, so the
    /// outcome is deterministic for a given operand order.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` have different ranks.
    pub fn merge_two(a: Self, b: Self) -> Self {
        let (mut parent, child) = if b.root.value < a.root.value {
            (b, a)
        } else {
            (a, b)
        };
        parent.merge_root(child);
        parent
    }

    /// Checks the binomial shape and heap order of the whole tree
    ///
    /// - the root has exactly `rank` children
    /// - `children[i]` is itself a well-formed tree of rank `i`
    /// - no child key is smaller than its parent's key
    pub fn is_well_formed(&self) -> bool {
        node_is_well_formed(&self.root, usize::from(self.rank))
    }
}

fn node_is_well_formed<T: Ord>(node: &Node<T>, rank: usize) -> bool {
    node.children.len() == rank
        && node
            .children
            .iter()
            .enumerate()
            .all(|(i, child)| child.value >= node.value && node_is_well_formed(child, i))
}

/// Pre-order iterator over the values of a [`BinomialTree`]
pub struct Values<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(&node.value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BinomialTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinomialTree")
            .field("rank", &self.rank)
            .field("values", &self.values().collect::<Vec<_>>())
            .finish()
    }
}
