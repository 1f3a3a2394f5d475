//! Readers that turn files into validated candidate sequences.
//!
//! This module provides readers for:
//!
//! - **Plain lists**: one sequence per line, `#` comments and blank lines skipped
//! - **FASTA files**: one sequence per record, optionally gzip/bgzip compressed
//!
//! Every sequence is uppercased and checked against the DNA alphabet before it
//! is returned; length against the reference is checked later, by the analyzer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mutscreen::parsing::read_sequences;
//! use std::path::Path;
//!
//! let sequences = read_sequences(Path::new("candidates.fa")).unwrap();
//! for s in &sequences {
//!     println!("{}: {}", s.name, s.sequence);
//! }
//! ```

use std::path::Path;
use thiserror::Error;

use crate::utils::validation::{SequenceError, MAX_SEQUENCES};

pub mod fasta;
pub mod list;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FASTA error: {0}")]
    Fasta(String),

    #[error("Invalid sequence in record {record}: {source}")]
    InvalidSequence {
        /// 1-based record (line or FASTA entry) number
        record: usize,
        #[source]
        source: SequenceError,
    },

    #[error("Too many sequences: {0} exceeds maximum allowed ({MAX_SEQUENCES})")]
    TooManySequences(usize),

    #[error("No sequences found in input")]
    Empty,
}

/// A sequence read from an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    /// FASTA record name, or `line_<n>` for plain lists
    pub name: String,

    /// Uppercase, alphabet-checked sequence
    pub sequence: String,
}

/// Read sequences from `path`, choosing the reader from the file extension.
///
/// FASTA extensions (see [`fasta::is_fasta_file`]) use the FASTA reader;
/// anything else is read as a plain list.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file cannot be read, a sequence fails
/// validation, the input is empty, or it exceeds [`MAX_SEQUENCES`].
pub fn read_sequences(path: &Path) -> Result<Vec<NamedSequence>, ParseError> {
    if fasta::is_fasta_file(path) {
        fasta::parse_fasta_file(path)
    } else {
        list::parse_list_file(path)
    }
}

/// Check that `count` sequences gathered from several inputs stay within
/// [`MAX_SEQUENCES`].
///
/// # Errors
///
/// Returns `ParseError::TooManySequences` when `count` is over the limit.
pub fn check_total(count: usize) -> Result<(), ParseError> {
    if count > MAX_SEQUENCES {
        return Err(ParseError::TooManySequences(count));
    }
    Ok(())
}
