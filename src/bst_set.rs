use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::raw::RawBstSet;

mod capacity;
mod traversal;

pub use traversal::{IntoIter, Iter, Postorder, Preorder};

/// An ordered set backed by an unbalanced binary search tree.
///
/// Every operation runs in O(height) time. Because no rebalancing is ever
/// performed, the height depends entirely on the insertion order: random
/// orders tend to produce O(log n) height, while sorted insertion produces
/// a chain of height n. This is an accepted property of the structure, not
/// a defect; callers that need guaranteed logarithmic bounds should reach
/// for `std::collections::BTreeSet` instead.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the set. This is normally only possible
/// through [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `BstSet` that observed it and not result in
/// undefined behavior. This could include panics, incorrect results, and
/// non-termination.
///
/// Two keys are considered the same element exactly when neither compares
/// less than the other; no other notion of identity is consulted.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use plain_bst::BstSet;
///
/// // Type inference lets us omit an explicit type signature (which
/// // would be `BstSet<&str>` in this example).
/// let mut books = BstSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.remove("The Odyssey");
///
/// // Iterate over everything in sorted order.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `BstSet` with a known list of items can be initialized from an array;
/// duplicates in the array are silently skipped:
///
/// ```
/// use plain_bst::BstSet;
///
/// let set = BstSet::from([1, 2, 3, 2]);
/// assert_eq!(set.len(), 3);
/// ```
pub struct BstSet<T> {
    tree: RawBstSet<T>,
}

impl<T> BstSet<T> {
    /// Makes a new, empty `BstSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> BstSet<T> {
        BstSet {
            tree: RawBstSet::new(),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut v = BstSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut a = BstSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut a = BstSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.get(value).is_some()
    }

    /// Returns a reference to the value in the set, if any, that is equal to
    /// the given value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.get(value)
    }

    /// Returns a reference to the smallest value in the set that is greater
    /// than or equal to the given value, if any.
    ///
    /// An exact match is returned as-is; otherwise this is the stored
    /// successor of `value`. Returns `None` when every element of the set
    /// compares less than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([10, 20, 30]);
    /// assert_eq!(set.find(&15), Some(&20));
    /// assert_eq!(set.find(&30), Some(&30));
    /// assert_eq!(set.find(&31), None);
    /// assert_eq!(set.find(&5), Some(&10));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn find<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.lower_bound(value)
    }

    /// Returns the first element in the set, if any.
    /// This is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&2));
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn first(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.tree.first()
    }

    /// Returns the last element in the set, if any.
    /// This is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// assert_eq!(set.last(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn last(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.tree.last()
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned,
    ///   and the set is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(value)
    }

    /// If the set contains an element equal to the value, removes it from
    /// the set and drops it. Returns whether such an element was present.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value)
    }

    /// Gets an iterator over the values in the set, in sorted order.
    ///
    /// This is the in-order traversal of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(3);
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// for value in set.iter() {
    ///     println!("{value}");
    /// }
    ///
    /// let first = set.iter().next().unwrap();
    /// assert_eq!(*first, 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to create the iterator; O(1) amortized per iteration step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.tree)
    }
}

impl<T: Hash> Hash for BstSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for BstSet<T> {
    fn eq(&self, other: &BstSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BstSet<T> {}

impl<T: PartialOrd> PartialOrd for BstSet<T> {
    fn partial_cmp(&self, other: &BstSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for BstSet<T> {
    fn cmp(&self, other: &BstSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for BstSet<T> {
    fn clone(&self) -> Self {
        BstSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BstSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        BstSet::new()
    }
}

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BstSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Ord> IntoIterator for BstSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `BstSet`'s contents in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 4, 2]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
