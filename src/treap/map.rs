use crate::treap::node::Node;
use crate::treap::tree;
use crate::treap::{Error, Result};
use log::{debug, trace};

/// An ordered container implemented by a treap whose priorities are supplied by the caller.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than or equal to all keys occurring in its right subtree. The priority of a node is
/// greater than or equal to the priority of all nodes in its subtrees. When priorities are drawn
/// uniformly at random, the expected height of the tree is proportional to the logarithm of the
/// number of keys.
///
/// Every mutation is built from two primitives: splitting a treap around a key and merging two
/// treaps whose key ranges do not overlap.
///
/// # Examples
///
/// ```
/// use cartesian_tree::treap::Treap;
///
/// let mut t = Treap::new();
/// t.insert(5, 3);
/// t.insert(2, 9);
/// t.insert(8, 1);
///
/// assert_eq!(t.root().map(|node| (*node.key(), *node.priority())), Some((2, 9)));
/// assert_eq!(t.get(&5), Some(&3));
/// assert_eq!(t.len(), 3);
///
/// assert_eq!(t.remove(&2), Ok((2, 9)));
/// assert!(t.remove(&2).is_err());
/// assert_eq!(t.root().map(|node| *node.key()), Some(5));
/// ```
pub struct Treap<T, P> {
    root: tree::Tree<T, P>,
    len: usize,
}

impl<T, P> Treap<T, P> {
    /// Constructs a new, empty `Treap<T, P>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let t: Treap<u32, u32> = Treap::new();
    /// ```
    pub fn new() -> Self {
        Treap { root: None, len: 0 }
    }

    /// Returns the number of nodes in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap has no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let t: Treap<u32, u32> = Treap::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the treap, removing all nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// t.insert(2, 2);
    /// t.clear();
    /// assert!(t.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.len = 0;
    }

    /// Returns the root of the treap, or `None` if the treap is empty. Together with
    /// `Node::left` and `Node::right` this exposes the full shape of the tree without allowing it
    /// to be modified.
    pub fn root(&self) -> Option<&Node<T, P>> {
        self.root.as_deref()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 3);
    /// t.insert(2, 2);
    /// t.insert(3, 1);
    /// assert_eq!(t.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns an iterator over the nodes of the treap. Each node is yielded before the nodes of
    /// its left subtree, which are yielded before the nodes of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(5, 3);
    /// t.insert(2, 9);
    /// t.insert(1, 4);
    ///
    /// let keys: Vec<u32> = t.nodes().map(|node| *node.key()).collect();
    /// assert_eq!(keys, vec![2, 1, 5]);
    /// ```
    pub fn nodes(&self) -> Nodes<'_, T, P> {
        Nodes {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<T, P> Treap<T, P>
where
    T: Ord,
    P: Ord,
{
    /// Inserts a key with a given priority into the treap. Keys that are already present are not
    /// replaced; the treap keeps every copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// t.insert(1, 2);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T, priority: P) {
        tree::insert(&mut self.root, Node::new(key, priority));
        self.len += 1;
        trace!("inserted node, len = {}", self.len);
    }

    /// Removes a key from the treap and returns it with its priority. If the key occurs more than
    /// once, the copy with the highest priority is removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the key does not exist in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::{Error, Treap};
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 7);
    /// assert_eq!(t.remove(&1), Ok((1, 7)));
    /// assert_eq!(t.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<(T, P)> {
        match tree::remove(&mut self.root, key) {
            Some(entry) => {
                self.len -= 1;
                trace!("removed node, len = {}", self.len);
                Ok(entry)
            },
            None => {
                debug!("attempted to remove a key that is not in the treap");
                Err(Error::KeyNotFound)
            },
        }
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the priority of the topmost node holding a key. Returns `None` if the key does not
    /// exist in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 4);
    /// assert_eq!(t.get(&1), Some(&4));
    /// assert_eq!(t.get(&2), None);
    /// ```
    pub fn get(&self, key: &T) -> Option<&P> {
        tree::get(&self.root, key).map(Node::priority)
    }

    /// Splits the treap at a key. Afterwards `self` holds every key less than `key` and the
    /// returned treap holds every key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 5);
    /// t.insert(2, 3);
    /// t.insert(3, 4);
    ///
    /// let hi = t.split_off(&2);
    /// assert_eq!(t.len(), 1);
    /// assert_eq!(hi.len(), 2);
    /// assert!(hi.contains(&2));
    /// ```
    pub fn split_off(&mut self, key: &T) -> Self {
        let (lo, hi) = tree::split(self.root.take(), key);
        let hi_len = tree::len(&hi);
        self.root = lo;
        self.len -= hi_len;
        trace!("split treap into {} and {} nodes", self.len, hi_len);
        Treap {
            root: hi,
            len: hi_len,
        }
    }

    /// Merges two treaps into one. Every key in `left` must be less than every key in `right`;
    /// this is only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartesian_tree::treap::Treap;
    ///
    /// let mut n = Treap::new();
    /// n.insert(1, 1);
    /// n.insert(2, 8);
    ///
    /// let mut m = Treap::new();
    /// m.insert(3, 5);
    ///
    /// let t = Treap::merge(n, m);
    /// assert_eq!(t.len(), 3);
    /// assert_eq!(t.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn merge(mut left: Self, mut right: Self) -> Self {
        debug_assert!(
            match (tree::max(&left.root), tree::min(&right.root)) {
                (Some(left_max), Some(right_min)) => left_max < right_min,
                _ => true,
            },
            "Error: merging treaps with overlapping keys."
        );
        let len = left.len + right.len;
        let root = tree::merge(left.root.take(), right.root.take());
        left.len = 0;
        right.len = 0;
        trace!("merged treaps into {} nodes", len);
        Treap { root, len }
    }
}

impl<T, P> Drop for Treap<T, P> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<T, P> Default for Treap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, P> IntoIterator for &'a Treap<T, P>
where
    T: 'a,
    P: 'a,
{
    type IntoIter = Nodes<'a, T, P>;
    type Item = &'a Node<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// An iterator over the nodes of a `Treap<T, P>`.
///
/// This iterator visits the nodes in pre-order and yields immutable references, so a caller can
/// draw every node and the links to its children without modifying the treap.
pub struct Nodes<'a, T, P> {
    stack: Vec<&'a Node<T, P>>,
}

impl<'a, T, P> Iterator for Nodes<'a, T, P>
where
    T: 'a,
    P: 'a,
{
    type Item = &'a Node<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            self.stack.extend(node.right());
            self.stack.extend(node.left());
            node
        })
    }
}
