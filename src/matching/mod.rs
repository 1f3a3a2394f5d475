//! Mutation counting and similarity ranking.
//!
//! This module provides the ranking side of the analysis:
//!
//! - [`count_mutations`]: positional difference count against the reference
//! - [`RankTree`]: binary search tree keyed by mutation count
//! - [`MutationAnalyzer`]: owns the reference and the tree; validates and inserts
//!
//! [`count_mutations`]: mutation::count_mutations
//! [`RankTree`]: rank_tree::RankTree
//! [`MutationAnalyzer`]: engine::MutationAnalyzer
//!
//! ## Ranking
//!
//! Candidates are ranked by mutation count, lowest first. Similarity is
//! reported as `(1 - mutations / reference_length) * 100`.
//!
//! Equal counts are always placed in the right subtree of the node they tie
//! with, so among ties an earlier-inserted record that ends up as an ancestor
//! ranks ahead of the later ones.
//!
//! ## Example
//!
//! ```rust
//! use mutscreen::MutationAnalyzer;
//!
//! let mut analyzer = MutationAnalyzer::new("ATGC").unwrap();
//! analyzer.add_sequence("ATGG", 1).unwrap();
//! analyzer.add_sequence("ATGC", 2).unwrap();
//!
//! for entry in analyzer.ranking() {
//!     println!("#{} seq {} ({:.2}%)", entry.rank, entry.index, entry.similarity);
//! }
//! ```

pub mod engine;
pub mod mutation;
pub mod rank_tree;
