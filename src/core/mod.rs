//! Core data types for sequence ranking and marker screening.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SequenceRecord`]: A candidate sequence with its mutation count and insertion index
//! - [`MarkerEntry`]: A known marker subsequence and its gene label
//! - [`BinaryTree`]: The arena-backed unbalanced tree both engines are built on
//! - [`BranchLabel`], [`Subject`]: Labels used in tree dumps and screening results
//!
//! [`SequenceRecord`]: sequence::SequenceRecord
//! [`MarkerEntry`]: marker::MarkerEntry
//! [`BinaryTree`]: tree::BinaryTree
//! [`BranchLabel`]: types::BranchLabel
//! [`Subject`]: types::Subject
//!
//! ## Alphabet
//!
//! Sequences are compared after ASCII uppercasing and may only contain:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | A, T, G, C | Nucleotides |
//! | -      | Gap |

pub mod marker;
pub mod sequence;
pub mod tree;
pub mod types;
