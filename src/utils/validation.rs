//! Centralized validation and helper functions.

/// Maximum number of candidate sequences accepted from a single input (DOS protection)
pub const MAX_SEQUENCES: usize = 100_000;

/// Characters allowed in a normalized DNA sequence. `-` marks a gap.
pub const DNA_ALPHABET: [char; 5] = ['A', 'T', 'G', 'C', '-'];

/// Sequence validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,

    #[error(
        "Invalid character '{character}' at position {position}: sequence must contain only A, T, G, C and -"
    )]
    InvalidAlphabet { position: usize, character: char },

    #[error("Sequence must be of equal length ({expected} characters), found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Check whether a character belongs to the DNA alphabet (case-insensitive).
#[must_use]
pub fn is_dna_char(c: char) -> bool {
    DNA_ALPHABET.contains(&c.to_ascii_uppercase())
}

/// Normalize a sequence for comparison: trims surrounding whitespace and uppercases.
///
/// # Examples
///
/// ```
/// use mutscreen::utils::validation::normalize_sequence;
///
/// assert_eq!(normalize_sequence(" atg-c\n"), "ATG-C");
/// ```
#[must_use]
pub fn normalize_sequence(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// Check that every character of `seq` is in the DNA alphabet.
///
/// Case is not significant. Returns the first offending character and its
/// 0-based position.
///
/// # Errors
///
/// Returns `SequenceError::Empty` for an empty sequence and
/// `SequenceError::InvalidAlphabet` on the first character outside `{A,T,G,C,-}`.
///
/// # Examples
///
/// ```
/// use mutscreen::utils::validation::{validate_alphabet, SequenceError};
///
/// assert!(validate_alphabet("ATGC-").is_ok());
/// assert_eq!(
///     validate_alphabet("ATXC"),
///     Err(SequenceError::InvalidAlphabet { position: 2, character: 'X' })
/// );
/// ```
pub fn validate_alphabet(seq: &str) -> Result<(), SequenceError> {
    if seq.is_empty() {
        return Err(SequenceError::Empty);
    }

    match seq.chars().enumerate().find(|(_, c)| !is_dna_char(*c)) {
        Some((position, character)) => Err(SequenceError::InvalidAlphabet {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Normalize and validate a sequence in one step.
///
/// # Errors
///
/// See [`validate_alphabet`].
pub fn parse_sequence(s: &str) -> Result<String, SequenceError> {
    let normalized = normalize_sequence(s);
    validate_alphabet(&normalized)?;
    Ok(normalized)
}

/// Normalize and validate a catalog marker.
///
/// Markers are matched as exact substrings, so unlike sequences they may not
/// contain gaps.
///
/// # Errors
///
/// Returns `SequenceError::Empty` for an empty marker and
/// `SequenceError::InvalidAlphabet` on the first character outside `{A,T,G,C}`.
///
/// # Examples
///
/// ```
/// use mutscreen::utils::validation::{parse_marker, SequenceError};
///
/// assert_eq!(parse_marker("atgc").unwrap(), "ATGC");
/// assert_eq!(
///     parse_marker("A-T"),
///     Err(SequenceError::InvalidAlphabet { position: 1, character: '-' })
/// );
/// ```
pub fn parse_marker(s: &str) -> Result<String, SequenceError> {
    let normalized = parse_sequence(s)?;
    if let Some(position) = normalized.find('-') {
        return Err(SequenceError::InvalidAlphabet {
            position,
            character: '-',
        });
    }
    Ok(normalized)
}

/// Check if adding another sequence would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new sequence.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_sequence_limit(count: usize) -> Option<String> {
    if count >= MAX_SEQUENCES {
        Some(format!(
            "Too many sequences: adding another would exceed maximum of {MAX_SEQUENCES}"
        ))
    } else {
        None
    }
}

/// Convert a count to f64 for percentage calculations
#[inline]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
