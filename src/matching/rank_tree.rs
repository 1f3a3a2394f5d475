use tracing::debug;

use crate::core::sequence::SequenceRecord;
use crate::core::tree::{BinaryTree, InOrder, Placement, PreOrder};
use crate::core::types::BranchLabel;

/// Binary search tree of candidate sequences keyed by mutation count.
///
/// A record goes left only if its count is strictly less than the node's;
/// equal counts always go right. The in-order walk is therefore
/// non-decreasing in mutation count, and records with the same count come out
/// in an order set by the tree shape.
#[derive(Debug, Clone, Default)]
pub struct RankTree {
    tree: BinaryTree<SequenceRecord>,
}

impl RankTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Never fails and never touches existing records.
    pub fn insert(&mut self, sequence: impl Into<String>, mutation_count: usize, index: usize) {
        let record = SequenceRecord::new(sequence, mutation_count, index);
        debug!(index, mutation_count, "inserting sequence into rank tree");
        self.tree.insert_by(record, |new, node| {
            if new.mutation_count < node.mutation_count {
                Placement::Left
            } else {
                Placement::Right
            }
        });
    }

    /// Records in ascending mutation count. Each call starts a fresh walk.
    pub fn traverse_ascending(&self) -> InOrder<'_, SequenceRecord> {
        self.tree.in_order()
    }

    /// Alias for [`RankTree::traverse_ascending`]
    pub fn iter(&self) -> InOrder<'_, SequenceRecord> {
        self.traverse_ascending()
    }

    /// Pre-order `(depth, label, record)` triples for diagnostic display
    pub fn dump_structure(&self) -> PreOrder<'_, SequenceRecord> {
        self.tree.pre_order()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Number of records reachable from the root
    pub fn reachable_count(&self) -> usize {
        self.tree.reachable_count()
    }
}

impl<'a> IntoIterator for &'a RankTree {
    type Item = &'a SequenceRecord;
    type IntoIter = InOrder<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_ascending()
    }
}

/// Owned copy of a rank tree dump entry, for serialization
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankTreeNode {
    pub depth: usize,
    pub branch: BranchLabel,
    pub index: usize,
    pub mutation_count: usize,
}

impl RankTree {
    pub fn structure(&self) -> Vec<RankTreeNode> {
        self.dump_structure()
            .map(|(depth, branch, record)| RankTreeNode {
                depth,
                branch,
                index: record.index,
                mutation_count: record.mutation_count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(counts: &[usize]) -> RankTree {
        let mut tree = RankTree::new();
        for (i, &count) in counts.iter().enumerate() {
            tree.insert(format!("SEQ{}", i + 1), count, i + 1);
        }
        tree
    }

    #[test]
    fn test_traversal_is_non_decreasing() {
        let tree = build(&[3, 1, 3, 2]);
        let counts: Vec<usize> = tree.iter().map(|r| r.mutation_count).collect();
        assert_eq!(counts.len(), 4);
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_equal_counts_route_right() {
        // 3 (#1) is the root; #3 ties with it and lands in its right subtree,
        // so #1 ranks ahead of #3.
        let tree = build(&[3, 1, 3, 2]);
        let order: Vec<usize> = tree.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);

        let dump = tree.structure();
        assert_eq!(dump[0].branch, BranchLabel::Root);
        assert_eq!(dump[0].index, 1);
        let tie = dump.iter().find(|n| n.index == 3).unwrap();
        assert_eq!(tie.branch, BranchLabel::Right);
        assert_eq!(tie.depth, 1);
    }

    #[test]
    fn test_dump_structure_is_pre_order() {
        let tree = build(&[3, 1, 3, 2]);
        let dump: Vec<(usize, BranchLabel, usize)> = tree
            .dump_structure()
            .map(|(d, b, r)| (d, b, r.index))
            .collect();
        assert_eq!(
            dump,
            vec![
                (0, BranchLabel::Root, 1),
                (1, BranchLabel::Left, 2),
                (2, BranchLabel::Right, 4),
                (1, BranchLabel::Right, 3),
            ]
        );
    }

    #[test]
    fn test_all_equal_counts_keep_insertion_order() {
        let tree = build(&[2, 2, 2, 2]);
        let order: Vec<usize> = tree.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn test_node_count_matches_insertions() {
        let counts: Vec<usize> = (0..200).map(|i| (i * 37) % 11).collect();
        let tree = build(&counts);
        assert_eq!(tree.len(), 200);
        assert_eq!(tree.reachable_count(), 200);
        assert_eq!(tree.iter().count(), 200);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let tree = build(&[5, 0, 9]);
        let first: Vec<usize> = tree.iter().map(|r| r.index).collect();
        let second: Vec<usize> = (&tree).into_iter().map(|r| r.index).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_tree() {
        let tree = RankTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.structure().is_empty());
    }

    #[test]
    fn test_increasing_counts_form_a_chain() {
        let mut tree = RankTree::new();
        for i in 0..2_000 {
            tree.insert("A", i, i + 1);
        }
        assert_eq!(tree.height(), 2_000);
        assert_eq!(tree.iter().count(), 2_000);
        assert_eq!(tree.iter().next().map(|r| r.mutation_count), Some(0));
        assert_eq!(tree.iter().last().map(|r| r.index), Some(2_000));
    }
}
