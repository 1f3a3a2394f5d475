//! Arena-backed unbalanced binary tree shared by the rank tree and the marker catalog.
//!
//! Nodes live in a `Vec` and refer to their children by index. There are no
//! parent links and no node is ever shared or removed, so the structure is
//! strictly tree-shaped and dropping the arena releases every node exactly once.
//!
//! All walks use an explicit stack: a tree built from already-sorted keys
//! degenerates into a list, and recursion over it would be bounded only by the
//! number of entries.

use crate::core::types::BranchLabel;

/// Where a new value goes relative to an existing node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
    /// Do not insert the value at all
    Reject,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unbalanced binary tree with caller-defined placement
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert `value`, descending from the root.
    ///
    /// At every node `place(&value, &node_value)` decides the direction; the
    /// value is attached at the first empty child slot reached. Returns `false`
    /// (and drops `value`) if `place` rejects it at any node.
    pub fn insert_by<F>(&mut self, value: T, mut place: F) -> bool
    where
        F: FnMut(&T, &T) -> Placement,
    {
        let Some(mut cursor) = self.root else {
            self.root = Some(self.push(value));
            return true;
        };

        loop {
            let direction = place(&value, &self.nodes[cursor].value);
            let slot = match direction {
                Placement::Left => self.nodes[cursor].left,
                Placement::Right => self.nodes[cursor].right,
                Placement::Reject => return false,
            };

            match slot {
                Some(child) => cursor = child,
                None => {
                    let index = self.push(value);
                    let parent = &mut self.nodes[cursor];
                    if direction == Placement::Left {
                        parent.left = Some(index);
                    } else {
                        parent.right = Some(index);
                    }
                    return true;
                }
            }
        }
    }

    fn push(&mut self, value: T) -> usize {
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Ordinary BST lookup. `probe` returns how the wanted key compares to the node's.
    pub fn find_by<F>(&self, mut probe: F) -> Option<&T>
    where
        F: FnMut(&T) -> std::cmp::Ordering,
    {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match probe(&node.value) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Number of nodes stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree)
    pub fn height(&self) -> usize {
        self.pre_order()
            .map(|(depth, _, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Count nodes by walking from the root
    pub fn reachable_count(&self) -> usize {
        self.pre_order().count()
    }

    /// Left subtree, node, right subtree
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Node, left subtree, right subtree, with depth and branch label
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: self
                .root
                .map(|root| (root, 0, BranchLabel::Root))
                .into_iter()
                .collect(),
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over a [`BinaryTree`]
pub struct InOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.cursor {
            self.stack.push(index);
            self.cursor = self.tree.nodes[index].left;
        }

        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];
        self.cursor = node.right;
        Some(&node.value)
    }
}

/// Pre-order iterator over a [`BinaryTree`] yielding `(depth, label, value)`
pub struct PreOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(usize, usize, BranchLabel)>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (usize, BranchLabel, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, depth, label) = self.stack.pop()?;
        let node = &self.tree.nodes[index];

        // Right is pushed first so the whole left subtree is visited before it
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1, BranchLabel::Right));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1, BranchLabel::Left));
        }

        Some((depth, label, &node.value))
    }
}
