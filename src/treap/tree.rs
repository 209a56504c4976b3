use crate::treap::node::{Node, Side};
use std::cmp::Ordering;

pub type Tree<T, P> = Option<Box<Node<T, P>>>;

// All traversals below walk with explicit cursors or stacks so that a degenerate sequence of
// priorities, which produces a tree as deep as it is large, cannot exhaust the call stack.

/// Splits `tree` into the nodes with keys less than `key` and the nodes with keys greater than or
/// equal to `key`.
pub fn split<T, P>(mut tree: Tree<T, P>, key: &T) -> (Tree<T, P>, Tree<T, P>)
where
    T: Ord,
{
    let mut lo = None;
    let mut hi = None;
    let mut lo_slot = &mut lo;
    let mut hi_slot = &mut hi;
    while let Some(mut node) = tree {
        if node.key < *key {
            tree = node.right.take();
            lo_slot = &mut lo_slot.insert(node).right;
        } else {
            tree = node.left.take();
            hi_slot = &mut hi_slot.insert(node).left;
        }
    }
    (lo, hi)
}

// precondition: every key in `left` is less than every key in `right`
pub fn merge<T, P>(mut left: Tree<T, P>, mut right: Tree<T, P>) -> Tree<T, P>
where
    P: Ord,
{
    let mut ret = None;
    let mut slot = &mut ret;
    loop {
        match (left.take(), right.take()) {
            (Some(mut l_node), Some(mut r_node)) => {
                if l_node.priority > r_node.priority {
                    left = l_node.right.take();
                    right = Some(r_node);
                    slot = &mut slot.insert(l_node).right;
                } else {
                    left = Some(l_node);
                    right = r_node.left.take();
                    slot = &mut slot.insert(r_node).left;
                }
            },
            (rest, None) | (None, rest) => {
                *slot = rest;
                break;
            },
        }
    }
    ret
}

pub fn insert<T, P>(tree: &mut Tree<T, P>, new_node: Node<T, P>)
where
    T: Ord,
    P: Ord,
{
    let (lo, hi) = split(tree.take(), &new_node.key);
    *tree = merge(merge(lo, Some(Box::new(new_node))), hi);
}

fn matching_side<T, P>(node: &Node<T, P>, key: &T) -> Option<Side>
where
    T: Ord,
{
    [Side::Left, Side::Right].iter().cloned().find(|&side| {
        node.child(side)
            .as_ref()
            .map_or(false, |child| child.key == *key)
    })
}

/// Returns the parent of the topmost node holding `key` and the side of the parent it hangs off.
///
/// The search only inspects the descendants of `node`; a key held by `node` itself is not found.
pub fn find_parent_mut<'a, T, P>(
    mut node: &'a mut Node<T, P>,
    key: &T,
) -> Option<(&'a mut Node<T, P>, Side)>
where
    T: Ord,
{
    loop {
        if let Some(side) = matching_side(node, key) {
            return Some((node, side));
        }
        node = if *key < node.key {
            node.left.as_deref_mut()?
        } else {
            node.right.as_deref_mut()?
        };
    }
}

/// Removes the topmost node holding `key` and replaces it with the merge of its children.
pub fn remove<T, P>(tree: &mut Tree<T, P>, key: &T) -> Option<(T, P)>
where
    T: Ord,
    P: Ord,
{
    let is_root = match tree {
        Some(node) => node.key == *key,
        None => return None,
    };
    let slot = if is_root {
        tree
    } else {
        let root = tree.as_deref_mut()?;
        let (parent, side) = find_parent_mut(root, key)?;
        parent.child_mut(side)
    };

    let mut node = slot.take()?;
    *slot = merge(node.left.take(), node.right.take());
    let Node {
        key: removed_key,
        priority,
        ..
    } = *node;
    Some((removed_key, priority))
}

pub fn get<'a, T, P>(tree: &'a Tree<T, P>, key: &T) -> Option<&'a Node<T, P>>
where
    T: Ord,
{
    let mut curr = tree.as_deref();
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

pub fn contains<T, P>(tree: &Tree<T, P>, key: &T) -> bool
where
    T: Ord,
{
    get(tree, key).is_some()
}

pub fn min<T, P>(tree: &Tree<T, P>) -> Option<&T> {
    tree.as_deref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T, P>(tree: &Tree<T, P>) -> Option<&T> {
    tree.as_deref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn len<T, P>(tree: &Tree<T, P>) -> usize {
    let mut stack: Vec<&Node<T, P>> = tree.as_deref().into_iter().collect();
    let mut len = 0;
    while let Some(node) = stack.pop() {
        len += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    len
}

pub fn height<T, P>(tree: &Tree<T, P>) -> usize {
    let mut stack: Vec<(&Node<T, P>, usize)> = tree
        .as_deref()
        .map(|node| (node, 1))
        .into_iter()
        .collect();
    let mut height = 0;
    while let Some((node, depth)) = stack.pop() {
        if depth > height {
            height = depth;
        }
        stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
        stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
    }
    height
}

/// Drops every node of `tree` without recursing through the child links.
pub fn clear<T, P>(tree: &mut Tree<T, P>) {
    let mut stack: Vec<Box<Node<T, P>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clear, contains, find_parent_mut, get, height, insert, len, max, merge, min, remove, split,
        Tree,
    };
    use crate::treap::node::{Node, Side};

    fn leaf(key: u32, priority: u32) -> Tree<u32, u32> {
        Some(Box::new(Node::new(key, priority)))
    }

    fn build(pairs: &[(u32, u32)]) -> Tree<u32, u32> {
        let mut tree = None;
        for &(key, priority) in pairs {
            insert(&mut tree, Node::new(key, priority));
        }
        tree
    }

    fn keys(tree: &Tree<u32, u32>) -> Vec<u32> {
        let mut ret = Vec::new();
        let mut stack = Vec::new();
        let mut curr = tree.as_deref();
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    ret.push(node.key);
                    curr = node.right.as_deref();
                },
                None => return ret,
            }
        }
    }

    #[test]
    fn test_split_empty() {
        let (lo, hi) = split::<u32, u32>(None, &1);
        assert!(lo.is_none());
        assert!(hi.is_none());
    }

    #[test]
    fn test_split_routes_equal_keys_right() {
        let tree = build(&[(1, 4), (3, 7), (5, 2), (7, 9), (9, 1)]);
        let (lo, hi) = split(tree, &5);
        assert_eq!(keys(&lo), vec![1, 3]);
        assert_eq!(keys(&hi), vec![5, 7, 9]);
    }

    #[test]
    fn test_split_extremes() {
        let tree = build(&[(1, 4), (3, 7), (5, 2)]);
        let (lo, hi) = split(tree, &0);
        assert!(lo.is_none());
        assert_eq!(keys(&hi), vec![1, 3, 5]);

        let (lo, hi) = split(hi, &10);
        assert_eq!(keys(&lo), vec![1, 3, 5]);
        assert!(hi.is_none());
    }

    #[test]
    fn test_merge_with_empty() {
        let tree = merge(leaf(1, 1), None);
        assert_eq!(keys(&tree), vec![1]);
        let tree = merge(None, tree);
        assert_eq!(keys(&tree), vec![1]);
        assert!(merge::<u32, u32>(None, None).is_none());
    }

    #[test]
    fn test_merge_higher_priority_becomes_root() {
        let tree = merge(leaf(1, 5), leaf(2, 3));
        let root = tree.as_deref().unwrap();
        assert_eq!(root.key, 1);
        assert_eq!(root.right.as_ref().map(|node| node.key), Some(2));

        let tree = merge(leaf(1, 3), leaf(2, 5));
        let root = tree.as_deref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().map(|node| node.key), Some(1));
    }

    #[test]
    fn test_merge_equal_priority_favors_right() {
        let tree = merge(leaf(1, 4), leaf(2, 4));
        let root = tree.as_deref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().map(|node| node.key), Some(1));
    }

    #[test]
    fn test_split_then_merge_keeps_keys() {
        let tree = build(&[(4, 1), (8, 6), (2, 3), (6, 8), (0, 5)]);
        let (lo, hi) = split(tree, &5);
        assert_eq!(len(&lo) + len(&hi), 5);
        let tree = merge(lo, hi);
        assert_eq!(keys(&tree), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_insert_shape() {
        let tree = build(&[(5, 3), (2, 9), (8, 1)]);
        let root = tree.as_deref().unwrap();
        assert_eq!((root.key, root.priority), (2, 9));
        assert!(root.left.is_none());
        let right = root.right.as_deref().unwrap();
        assert_eq!((right.key, right.priority), (5, 3));
        assert!(right.left.is_none());
        let right_right = right.right.as_deref().unwrap();
        assert_eq!((right_right.key, right_right.priority), (8, 1));
        assert!(right_right.left.is_none() && right_right.right.is_none());
    }

    #[test]
    fn test_find_parent() {
        let mut tree = build(&[(5, 3), (2, 9), (8, 1)]);
        let root = tree.as_deref_mut().unwrap();

        let (parent, side) = find_parent_mut(root, &5).unwrap();
        assert_eq!(parent.key, 2);
        assert_eq!(side, Side::Right);

        let root = tree.as_deref_mut().unwrap();
        let (parent, side) = find_parent_mut(root, &8).unwrap();
        assert_eq!(parent.key, 5);
        assert_eq!(side, Side::Right);

        let root = tree.as_deref_mut().unwrap();
        assert!(find_parent_mut(root, &2).is_none());
        let root = tree.as_deref_mut().unwrap();
        assert!(find_parent_mut(root, &7).is_none());
    }

    #[test]
    fn test_remove_root() {
        let mut tree = build(&[(5, 3), (2, 9), (8, 1)]);
        assert_eq!(remove(&mut tree, &2), Some((2, 9)));
        let root = tree.as_deref().unwrap();
        assert_eq!((root.key, root.priority), (5, 3));
        assert_eq!(root.right.as_ref().map(|node| node.key), Some(8));
    }

    #[test]
    fn test_remove_inner() {
        let mut tree = build(&[(5, 3), (2, 9), (8, 1)]);
        assert_eq!(remove(&mut tree, &5), Some((5, 3)));
        assert_eq!(keys(&tree), vec![2, 8]);
        assert_eq!(remove(&mut tree, &5), None);
        assert_eq!(remove(&mut None::<Box<Node<u32, u32>>>, &5), None);
    }

    #[test]
    fn test_remove_duplicate_takes_highest_priority() {
        let mut tree = build(&[(3, 2), (3, 7), (3, 5)]);
        assert_eq!(remove(&mut tree, &3), Some((3, 7)));
        assert_eq!(remove(&mut tree, &3), Some((3, 5)));
        assert_eq!(remove(&mut tree, &3), Some((3, 2)));
        assert!(tree.is_none());
    }

    #[test]
    fn test_get_contains() {
        let tree = build(&[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(get(&tree, &2).map(|node| node.priority), Some(2));
        assert!(contains(&tree, &3));
        assert!(!contains(&tree, &4));
    }

    #[test]
    fn test_min_max_height() {
        let tree = build(&[(4, 1), (8, 6), (2, 3)]);
        assert_eq!(min(&tree), Some(&2));
        assert_eq!(max(&tree), Some(&8));
        assert_eq!(height(&tree), 3);
        assert_eq!(height::<u32, u32>(&None), 0);
    }

    #[test]
    fn test_clear_deep_chain() {
        let mut tree = None;
        for key in 0..200_000 {
            insert(&mut tree, Node::new(key, key));
        }
        assert_eq!(height(&tree), 200_000);
        clear(&mut tree);
        assert!(tree.is_none());
    }
}
