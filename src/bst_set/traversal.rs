//! Tree traversal iterators.
//!
//! All iterators here are iterative: each carries its own explicit stack of
//! node handles instead of recursing, so a degenerate chain-shaped tree
//! (the worst case for an unbalanced structure) cannot overflow the call
//! stack. The stacks use inline storage sized for typical tree heights and
//! spill to the heap only beyond that.

use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::BstSet;
use crate::raw::{Handle, RawBstSet, STACK_DEPTH};

impl<T> BstSet<T> {
    /// Gets an iterator over the values in the set in pre-order:
    /// each node is visited before its left subtree, then its right subtree.
    ///
    /// Unlike [`iter`](BstSet::iter), the order depends on the shape of the
    /// tree and therefore on the order the values were inserted in.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([2, 1, 3]);
    ///
    /// let visited: Vec<_> = set.preorder().copied().collect();
    /// assert_eq!(visited, [2, 1, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) amortized per iteration step.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(&self.tree)
    }

    /// Gets an iterator over the values in the set in post-order:
    /// each node is visited after its left subtree, then its right subtree.
    ///
    /// Unlike [`iter`](BstSet::iter), the order depends on the shape of the
    /// tree and therefore on the order the values were inserted in.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([2, 1, 3]);
    ///
    /// let visited: Vec<_> = set.postorder().copied().collect();
    /// assert_eq!(visited, [1, 3, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) amortized per iteration step.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.tree)
    }
}

/// An iterator over the items of a `BstSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BstSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use plain_bst::BstSet;
///
/// let set = BstSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: BstSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    tree: Option<&'a RawBstSet<T>>,
    /// Left spine of the subtree still to be visited; the top of the stack
    /// is always the next node to yield.
    stack: SmallVec<[Handle; STACK_DEPTH]>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a RawBstSet<T>) -> Self {
        let mut iter = Iter {
            tree: Some(tree),
            stack: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        let Some(tree) = self.tree else {
            return;
        };
        while let Some(handle) = current {
            self.stack.push(handle);
            current = tree.node(handle).left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree?;
        let handle = self.stack.pop()?;
        let node = tree.node(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `bst_set::Iter`.
    ///
    /// ```
    /// # use plain_bst::bst_set;
    /// let iter: bst_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            tree: None,
            stack: SmallVec::new(),
            remaining: 0,
        }
    }
}

/// An owning iterator over the items of a `BstSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`BstSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// The tree is drained in a single O(n) pass when the iterator is created.
///
/// # Examples
///
/// ```
/// use plain_bst::BstSet;
///
/// let set = BstSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// ```
///
/// [`into_iter`]: BstSet#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T: Ord> IntoIter<T> {
    pub(crate) fn new(tree: RawBstSet<T>) -> Self {
        IntoIter {
            inner: tree.into_sorted_vec().into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `bst_set::IntoIter`.
    ///
    /// ```
    /// # use plain_bst::bst_set;
    /// let iter: bst_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

/// An iterator over the items of a `BstSet` in pre-order.
///
/// This `struct` is created by the [`preorder`] method on [`BstSet`].
/// See its documentation for more.
///
/// [`preorder`]: BstSet::preorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preorder<'a, T: 'a> {
    tree: Option<&'a RawBstSet<T>>,
    /// Subtree roots still to be visited, rightmost pending subtree at the
    /// bottom.
    stack: SmallVec<[Handle; STACK_DEPTH]>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(tree: &'a RawBstSet<T>) -> Self {
        let mut stack = SmallVec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Preorder {
            tree: Some(tree),
            stack,
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree?;
        let handle = self.stack.pop()?;
        let node = tree.node(handle);
        // Right below left, so the left subtree is exhausted first.
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

impl<T> Clone for Preorder<'_, T> {
    fn clone(&self) -> Self {
        Preorder {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Preorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preorder").field("remaining", &self.remaining).finish()
    }
}

impl<T> Default for Preorder<'_, T> {
    /// Creates an empty `bst_set::Preorder`.
    ///
    /// ```
    /// # use plain_bst::bst_set;
    /// let iter: bst_set::Preorder<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Preorder {
            tree: None,
            stack: SmallVec::new(),
            remaining: 0,
        }
    }
}

/// An iterator over the items of a `BstSet` in post-order.
///
/// This `struct` is created by the [`postorder`] method on [`BstSet`].
/// See its documentation for more.
///
/// [`postorder`]: BstSet::postorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Postorder<'a, T: 'a> {
    tree: Option<&'a RawBstSet<T>>,
    /// Pending nodes paired with an expansion flag: unexpanded entries still
    /// need their children scheduled ahead of them; expanded entries are
    /// ready to yield.
    stack: SmallVec<[(Handle, bool); STACK_DEPTH]>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(tree: &'a RawBstSet<T>) -> Self {
        let mut stack = SmallVec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Postorder {
            tree: Some(tree),
            stack,
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree?;
        loop {
            let (handle, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(tree.node(handle).key());
            }
            // Re-queue the node behind its children: left on top, then
            // right, then the node itself.
            let node = tree.node(handle);
            self.stack.push((handle, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

impl<T> Clone for Postorder<'_, T> {
    fn clone(&self) -> Self {
        Postorder {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Postorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Postorder").field("remaining", &self.remaining).finish()
    }
}

impl<T> Default for Postorder<'_, T> {
    /// Creates an empty `bst_set::Postorder`.
    ///
    /// ```
    /// # use plain_bst::bst_set;
    /// let iter: bst_set::Postorder<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Postorder {
            tree: None,
            stack: SmallVec::new(),
            remaining: 0,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// [5, 3, 8, 1, 4, 7, 9] inserted in order builds the full tree
    ///
    /// ```text
    ///       5
    ///      / \
    ///     3   8
    ///    / \ / \
    ///   1  4 7  9
    /// ```
    fn full_tree() -> BstSet<i32> {
        BstSet::from([5, 3, 8, 1, 4, 7, 9])
    }

    #[test]
    fn traversal_orders() {
        let set = full_tree();
        let inorder: Vec<_> = set.iter().copied().collect();
        let preorder: Vec<_> = set.preorder().copied().collect();
        let postorder: Vec<_> = set.postorder().copied().collect();

        assert_eq!(inorder, [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(preorder, [5, 3, 1, 4, 8, 7, 9]);
        assert_eq!(postorder, [1, 4, 3, 7, 9, 8, 5]);
    }

    #[test]
    fn traversals_are_restartable() {
        let set = full_tree();
        // Two passes over the same set observe the same sequence.
        let once: Vec<_> = set.preorder().copied().collect();
        let twice: Vec<_> = set.preorder().copied().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn exact_size_counts_down() {
        let set = full_tree();
        let mut iter = set.iter();
        for expected in (0..7).rev() {
            iter.next();
            assert_eq!(iter.len(), expected);
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn chain_shaped_tree_traverses_fully() {
        // Sorted insertion degrades to a right chain deeper than the
        // iterators' inline stack capacity.
        let set: BstSet<i32> = (0..256).collect();

        assert!(set.iter().copied().eq(0..256));
        // A right chain visits identically in pre-order and in-order,
        // and in reverse in post-order.
        assert!(set.preorder().copied().eq(0..256));
        assert!(set.postorder().copied().eq((0..256).rev()));
    }

    #[test]
    fn empty_set_traversals() {
        let set: BstSet<i32> = BstSet::new();
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.preorder().next(), None);
        assert_eq!(set.postorder().next(), None);
    }
}
