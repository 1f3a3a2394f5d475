//! Parser for FASTA files using noodles.
//!
//! Each record becomes one candidate sequence; multi-line records are joined.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::parsing::{NamedSequence, ParseError};
use crate::utils::validation::{check_sequence_limit, validate_alphabet};

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into uppercase, alphabet-checked sequences.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta` if
/// parsing fails, `ParseError::InvalidSequence` for a record outside the DNA
/// alphabet, `ParseError::Empty` if no records are found, or
/// `ParseError::TooManySequences` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<NamedSequence>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        parse_fasta_reader(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        parse_fasta_reader(&mut reader)
    }
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<NamedSequence>, ParseError> {
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record =
            result.map_err(|e| ParseError::Fasta(format!("Failed to parse FASTA record: {e}")))?;

        // Check sequence limit for DOS protection
        if check_sequence_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManySequences(sequences.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence: String = record
            .sequence()
            .as_ref()
            .iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect();

        validate_alphabet(&sequence).map_err(|source| ParseError::InvalidSequence {
            record: sequences.len() + 1,
            source,
        })?;

        sequences.push(NamedSequence { name, sequence });
    }

    if sequences.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(sequences)
}
