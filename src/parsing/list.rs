//! Parser for plain sequence lists: one sequence per line.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::parsing::{NamedSequence, ParseError};
use crate::utils::validation::{check_sequence_limit, parse_sequence};

/// Parse a plain list file
///
/// # Errors
///
/// See [`parse_list_reader`].
pub fn parse_list_file(path: &Path) -> Result<Vec<NamedSequence>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_list_reader(file)
}

/// Parse a plain list from any reader (e.g. stdin).
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Record numbers in errors and in the generated names are 1-based line numbers.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::InvalidSequence` for a
/// line outside the DNA alphabet, `ParseError::TooManySequences` past the limit,
/// or `ParseError::Empty` if no sequence was found.
pub fn parse_list_reader<R: Read>(reader: R) -> Result<Vec<NamedSequence>, ParseError> {
    let mut sequences = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_number = i + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if check_sequence_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManySequences(sequences.len()));
        }

        let sequence = parse_sequence(trimmed).map_err(|source| ParseError::InvalidSequence {
            record: line_number,
            source,
        })?;

        sequences.push(NamedSequence {
            name: format!("line_{line_number}"),
            sequence,
        });
    }

    if sequences.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(sequences)
}
