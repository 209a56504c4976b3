use crate::treap::tree;

/// The side of a parent that a child occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// A node of a treap.
///
/// The key places the node in the binary search tree and the priority places it in the heap. Both
/// are fixed once the node is created; only the child links change.
pub struct Node<T, P> {
    pub(crate) key: T,
    pub(crate) priority: P,
    pub(crate) left: tree::Tree<T, P>,
    pub(crate) right: tree::Tree<T, P>,
}

impl<T, P> Node<T, P> {
    pub(crate) fn new(key: T, priority: P) -> Self {
        Node {
            key,
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns the key of the node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns the priority of the node.
    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// Returns the left child of the node, if any.
    pub fn left(&self) -> Option<&Node<T, P>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of the node, if any.
    pub fn right(&self) -> Option<&Node<T, P>> {
        self.right.as_ref().map(|node| &**node)
    }

    pub(crate) fn child(&self, side: Side) -> &tree::Tree<T, P> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut tree::Tree<T, P> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
