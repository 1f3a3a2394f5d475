use tracing::{debug, warn};

use crate::catalog::store::MarkerSet;
use crate::core::marker::MarkerEntry;
use crate::core::tree::{BinaryTree, Placement, PreOrder};
use crate::core::types::BranchLabel;

/// Binary search tree of known markers keyed by marker sequence.
///
/// The ordering only keeps keys unique. [`MarkerCatalog::find_matches`] asks
/// whether a marker is a *substring* of the query, which is unrelated to the
/// lexicographic key, so every query walks the whole tree.
#[derive(Debug, Clone, Default)]
pub struct MarkerCatalog {
    tree: BinaryTree<MarkerEntry>,
}

impl MarkerCatalog {
    /// Build a catalog from the markers in `set`, inserted in order
    pub fn new(set: &MarkerSet) -> Self {
        let mut catalog = Self::default();
        for marker in &set.markers {
            if !catalog.insert(&marker.sequence, &marker.gene) {
                warn!(
                    sequence = %marker.sequence,
                    gene = %marker.gene,
                    "empty or duplicate marker ignored"
                );
            }
        }
        debug!(markers = catalog.len(), "built marker catalog");
        catalog
    }

    /// Catalog over the embedded marker table
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table fails to parse.
    pub fn load_embedded() -> Result<Self, crate::catalog::store::CatalogError> {
        Ok(Self::new(&MarkerSet::load_embedded()?))
    }

    /// Insert a marker. Returns `false` if the sequence is empty or already
    /// present; a duplicate keeps the existing gene label.
    pub fn insert(&mut self, sequence: &str, gene: &str) -> bool {
        // An empty marker would be a substring of every query
        if sequence.is_empty() {
            return false;
        }
        let entry = MarkerEntry::new(sequence.to_ascii_uppercase(), gene);
        self.tree.insert_by(entry, |new, node| {
            match new.sequence.cmp(&node.sequence) {
                std::cmp::Ordering::Less => Placement::Left,
                std::cmp::Ordering::Greater => Placement::Right,
                std::cmp::Ordering::Equal => Placement::Reject,
            }
        })
    }

    /// Gene labels of every marker contained in `query`.
    ///
    /// Visits each node (node, then left subtree, then right subtree) and
    /// reports labels in that order. An empty result means no marker matched.
    pub fn find_matches(&self, query: &str) -> Vec<&str> {
        let query = query.to_ascii_uppercase();
        self.tree
            .pre_order()
            .filter(|(_, _, marker)| marker.is_contained_in(&query))
            .map(|(_, _, marker)| marker.gene.as_str())
            .collect()
    }

    /// Exact lookup by marker sequence
    pub fn get(&self, sequence: &str) -> Option<&MarkerEntry> {
        let sequence = sequence.to_ascii_uppercase();
        self.tree
            .find_by(|node| sequence.as_str().cmp(node.sequence.as_str()))
    }

    pub fn contains_marker(&self, sequence: &str) -> bool {
        self.get(sequence).is_some()
    }

    /// Pre-order `(depth, label, marker)` triples for diagnostic display
    pub fn dump_structure(&self) -> PreOrder<'_, MarkerEntry> {
        self.tree.pre_order()
    }

    /// Markers in lexicographic order of their sequence
    pub fn iter(&self) -> impl Iterator<Item = &MarkerEntry> {
        self.tree.in_order()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Owned copy of a marker tree dump entry, for serialization
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MarkerTreeNode {
    pub depth: usize,
    pub branch: BranchLabel,
    pub sequence: String,
    pub gene: String,
}

impl MarkerCatalog {
    pub fn structure(&self) -> Vec<MarkerTreeNode> {
        self.dump_structure()
            .map(|(depth, branch, marker)| MarkerTreeNode {
                depth,
                branch,
                sequence: marker.sequence.clone(),
                gene: marker.gene.clone(),
            })
            .collect()
    }
}
