use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The unbalanced binary search tree backing `BstSet`.
///
/// All public operations are built from two primitives: [`find_last`],
/// which walks from the root comparing keys, and [`splice`], which unlinks
/// a node with at most one child. Two-child removal composes them with an
/// in-order-successor search.
///
/// No rebalancing is performed anywhere; the height, and therefore the
/// cost of every operation, is bounded only by the element count.
///
/// [`find_last`]: RawBstSet::find_last
/// [`splice`]: RawBstSet::splice
pub(crate) struct RawBstSet<K> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of live nodes. Always equals the count reachable from `root`.
    len: usize,
}

/// Inline capacity for root-to-node traversal stacks.
///
/// Shared with the facade's iterators. Sixteen levels cover most trees
/// built from non-adversarial insertion orders without touching the heap.
pub(crate) const STACK_DEPTH: usize = 16;

impl<K> RawBstSet<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all keys from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the root handle, if the tree is non-empty.
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }
}

impl<K: Ord> RawBstSet<K> {
    /// The locate primitive: walks from the root comparing keys.
    ///
    /// Returns the node containing `key` if present; otherwise the last
    /// node visited before the walk fell off the tree, which is exactly
    /// the node a new key would be inserted under. Returns `None` only
    /// for an empty tree. Both lookup and insertion route through this
    /// walk so the comparison logic exists once.
    pub(crate) fn find_last<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            let next = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(current),
            };
            match next {
                Some(child) => current = child,
                // The walk fell off: `current` is the would-be parent.
                None => return Some(current),
            }
        }
    }

    /// Exact lookup. Returns the stored key equal to `key`, if any.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find_last(key)?;
        let found = self.nodes.get(handle).key();
        (key.cmp(found.borrow()) == Ordering::Equal).then_some(found)
    }

    /// Successor-or-exact lookup: the smallest stored key >= `key`.
    ///
    /// On every left turn the current node becomes the best candidate seen
    /// so far (the descent just established its key compares greater than
    /// `key`). An exact match wins immediately; if the walk ends without
    /// one, the last candidate is the answer. No left turn at all means no
    /// stored key is >= `key`.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut candidate = None;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key().borrow()) {
                Ordering::Less => {
                    candidate = Some(handle);
                    current = node.left();
                }
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.key()),
            }
        }

        candidate.map(|handle| self.nodes.get(handle).key())
    }

    /// Returns the minimum key, if any.
    pub(crate) fn first(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(self.nodes.get(current).key())
    }

    /// Returns the maximum key, if any.
    pub(crate) fn last(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(self.nodes.get(current).key())
    }

    /// Inserts a key. Returns false (tree unchanged) if it is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let Some(parent) = self.find_last(&key) else {
            // Empty tree: the new node becomes the root.
            let handle = self.nodes.alloc(Node::new(key));
            self.root = Some(handle);
            self.len = 1;
            return true;
        };

        let ordering = key.cmp(self.nodes.get(parent).key());
        if ordering == Ordering::Equal {
            return false;
        }

        let mut node = Node::new(key);
        node.set_parent(Some(parent));
        let handle = self.nodes.alloc(node);

        let parent_node = self.nodes.get_mut(parent);
        match ordering {
            Ordering::Less => parent_node.set_left(Some(handle)),
            Ordering::Greater => parent_node.set_right(Some(handle)),
            Ordering::Equal => unreachable!(),
        }

        self.len += 1;
        debug_assert_eq!(self.len, self.nodes.len());
        true
    }

    /// Removes a key. Returns false (tree unchanged) if it is absent.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = self.find_last(key) else {
            return false;
        };
        if key.cmp(self.nodes.get(handle).key().borrow()) != Ordering::Equal {
            return false;
        }
        self.remove_node(handle);
        true
    }

    /// Removes the node at `handle` while preserving the search-tree order.
    fn remove_node(&mut self, handle: Handle) {
        if self.nodes.get(handle).child_count() <= 1 {
            self.splice(handle);
        } else {
            // Two children: find the in-order successor (right once, then
            // left to the end). Its key is the smallest one exceeding the
            // removed key, so it can overwrite it without disturbing the
            // order on either side. The successor has no left child, which
            // makes it spliceable.
            let mut successor = self.nodes.get(handle).right().unwrap();
            while let Some(left) = self.nodes.get(successor).left() {
                successor = left;
            }
            let key = self.splice(successor);
            self.nodes.get_mut(handle).set_key(key);
        }
    }

    /// Unlinks a node with at most one child and returns its key.
    ///
    /// The node's sole child (if any) takes its place under its parent, or
    /// becomes the new root. Both sides of the link are rewritten here, and
    /// this is the only place a node leaves the arena.
    fn splice(&mut self, handle: Handle) -> K {
        let node = self.nodes.get(handle);
        debug_assert!(node.child_count() <= 1, "`RawBstSet::splice()` - node has two children!");
        let child = node.lone_child();
        let parent = node.parent();

        match parent {
            // Removing the root: the child is promoted.
            None => self.root = child,
            Some(parent) => self.nodes.get_mut(parent).replace_child(handle, child),
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(parent);
        }

        self.len -= 1;
        let key = self.nodes.take(handle).into_key();
        debug_assert_eq!(self.len, self.nodes.len());
        key
    }

    /// Consumes the tree, draining all keys into a sorted vector.
    ///
    /// This is an in-order walk that takes each node out of the arena as it
    /// is visited; O(n) after the leftmost descent.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<K> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[Handle; STACK_DEPTH]> = SmallVec::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            current = self.nodes.get(handle).right();
            result.push(self.nodes.take(handle).into_key());
        }

        result
    }
}

impl<K: Clone> Clone for RawBstSet<K> {
    fn clone(&self) -> Self {
        // Handles are slot indices and cloning the arena preserves the slot
        // layout, so every cloned link stays valid as-is.
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            len: self.len,
        }
    }
}
