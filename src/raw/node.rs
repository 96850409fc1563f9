use super::handle::Handle;

/// A single tree node: one key and three links.
///
/// `left` and `right` are the ownership edges of the tree; `parent` is a
/// plain back-link that must always agree with them (if `n.left == Some(m)`
/// then `m.parent == Some(n)`). Every structural mutation in
/// [`RawBstSet`](super::RawBstSet) maintains both sides together.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Node<K> {
    /// Creates a detached node: no parent, no children.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Overwrites the key in place. Used by two-child removal, which copies
    /// the in-order successor's key instead of moving the node itself.
    pub(crate) fn set_key(&mut self, key: K) {
        self.key = key;
    }

    /// Consumes the node, returning its key.
    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Returns the number of children (0, 1, or 2).
    pub(crate) const fn child_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    /// Returns this node's sole child, if it has at most one.
    ///
    /// With two children the left one is returned, but callers that care
    /// (splice) assert `child_count() <= 1` first.
    pub(crate) const fn lone_child(&self) -> Option<Handle> {
        match self.left {
            Some(left) => Some(left),
            None => self.right,
        }
    }

    /// Rewrites whichever child slot currently holds `old` to `new`.
    ///
    /// Panics if neither slot holds `old`; that would mean the parent
    /// back-link this call was derived from is corrupt.
    pub(crate) fn replace_child(&mut self, old: Handle, new: Option<Handle>) {
        if self.left == Some(old) {
            self.left = new;
        } else if self.right == Some(old) {
            self.right = new;
        } else {
            panic!("`Node::replace_child()` - `old` is not a child of this node!");
        }
    }
}
