//! # mutscreen
//!
//! A library for ranking DNA sequences by similarity to a reference and
//! screening them for known disease-associated markers.
//!
//! Each candidate sequence is compared position by position with a fixed
//! reference. The mutation counts are stored in a binary search tree whose
//! in-order walk gives the similarity ranking. Independently, every sequence is
//! checked against a catalog of marker subsequences (by default, markers in the
//! APOE, APP, PSEN1 and PSEN2 genes) kept in a second tree.
//!
//! ## Features
//!
//! - **Mutation counting**: Case-insensitive positional diff with typed length errors
//! - **Similarity ranking**: Rank tree keyed by mutation count, with structural dumps
//! - **Marker screening**: Exact substring containment across the whole marker catalog
//! - **Injectable catalogs**: Embedded default table or custom JSON marker tables
//! - **Input readers**: Plain lists and (gzipped) FASTA files
//!
//! ## Example
//!
//! ```rust
//! use mutscreen::{MarkerCatalog, MarkerSet, MutationAnalyzer};
//!
//! let mut analyzer = MutationAnalyzer::new("ATGCTCGGAT").unwrap();
//! analyzer.add_sequence("ATGCTCGGTT", 1).unwrap();
//!
//! let ranking = analyzer.ranking();
//! assert_eq!(format!("{:.2}", ranking[0].similarity), "90.00");
//!
//! let catalog = MarkerCatalog::new(&MarkerSet::load_embedded().unwrap());
//! let findings = analyzer.screen(&catalog);
//! assert_eq!(findings[0].genes, vec!["PSEN1 (M146L)".to_string()]);
//! assert!(findings[1].is_normal());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Marker catalog storage and screening
//! - [`core`]: Core data types and the shared tree arena
//! - [`matching`]: Mutation counting, rank tree and analyzer
//! - [`report`]: Ranking and screening reports
//! - [`parsing`]: Plain list and FASTA readers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::marker_tree::MarkerCatalog;
pub use catalog::store::MarkerSet;
pub use core::marker::MarkerEntry;
pub use core::sequence::SequenceRecord;
pub use core::types::*;
pub use matching::engine::MutationAnalyzer;
pub use matching::rank_tree::RankTree;
pub use report::{GeneFinding, RankedEntry};
pub use utils::validation::SequenceError;
