use std::collections::VecDeque;
use std::fmt::Display;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

/// Node in the arena-backed binary tree.
///
/// Children are addressed by arena index; `None` marks an absent child.
#[derive(Debug)]
pub struct BtNode<T> {
    /// Node label, rendered as `(value)` in the diagram
    pub value: T,
    /// Index of the left child, None if absent
    pub left: Option<Index>,
    /// Index of the right child, None if absent
    pub right: Option<Index>,
}

impl<T> BtNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The renderer only borrows the tree; ownership of all nodes stays here.
#[derive(Debug)]
pub struct BinaryTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<BtNode<T>>,
    /// Index of the root node, None for the empty tree
    root: Option<Index>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&BtNode<T>> {
        self.arena.get(idx)
    }

    pub fn node_mut(&mut self, idx: Index) -> Option<&mut BtNode<T>> {
        self.arena.get_mut(idx)
    }

    /// Inserts the root node, replacing any previous root reference.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_root(&mut self, value: T) -> Index {
        let idx = self.arena.insert(BtNode {
            value,
            left: None,
            right: None,
        });
        self.root = Some(idx);
        idx
    }

    /// Inserts a node as the left child of `parent`.
    ///
    /// A missing parent leaves the new node detached, mirroring the arena's
    /// lenient linking semantics.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_left(&mut self, parent: Index, value: T) -> Index {
        let idx = self.arena.insert(BtNode {
            value,
            left: None,
            right: None,
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.left = Some(idx);
        }
        idx
    }

    /// Inserts a node as the right child of `parent`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_right(&mut self, parent: Index, value: T) -> Index {
        let idx = self.arena.insert(BtNode {
            value,
            left: None,
            right: None,
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.right = Some(idx);
        }
        idx
    }

    pub fn iter(&self) -> impl Iterator<Item = (Index, &BtNode<T>)> {
        self.arena.iter()
    }

    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth). Root has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }

        while let Some((idx, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            if let Some(node) = self.node(idx) {
                if let Some(left) = node.left {
                    queue.push_back((left, depth + 1));
                }
                if let Some(right) = node.right {
                    queue.push_back((right, depth + 1));
                }
            }
        }

        max_depth
    }
}

impl<T: Display> BinaryTree<T> {
    /// Converts the tree into a `termtree` outline for indented listing.
    ///
    /// Unlike the ASCII diagram this view copes with labels of any width.
    #[instrument(level = "debug", skip(self))]
    pub fn to_outline(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.outline_node(root))
    }

    fn outline_node(&self, idx: Index) -> Tree<String> {
        let Some(node) = self.node(idx) else {
            return Tree::new(String::new());
        };

        let leaves: Vec<_> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.outline_node(child))
            .collect();

        Tree::new(node.value.to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_link() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root('A');
        let left = tree.insert_left(root, 'B');
        tree.insert_right(root, 'C');

        let root_node = tree.node(root).unwrap();
        assert_eq!(root_node.left, Some(left));
        assert!(root_node.right.is_some());
        assert!(tree.node(left).unwrap().is_leaf());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_depth_empty_tree_is_zero() {
        let tree: BinaryTree<char> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_depth_counts_longest_path() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root('A');
        let b = tree.insert_left(root, 'B');
        let d = tree.insert_left(b, 'D');
        tree.insert_right(d, 'H');
        tree.insert_right(root, 'C');

        assert_eq!(tree.depth(), 4);
    }
}
