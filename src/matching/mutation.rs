use crate::utils::validation::SequenceError;

/// Count positions where `candidate` differs from `reference`.
///
/// Comparison is case-insensitive. The whole sequence is scanned; there is no
/// early exit on the first difference.
///
/// # Errors
///
/// Returns `SequenceError::LengthMismatch` if the sequences differ in length.
///
/// # Examples
///
/// ```
/// use mutscreen::matching::mutation::count_mutations;
///
/// assert_eq!(count_mutations("ATGC", "ATGG").unwrap(), 1);
/// assert_eq!(count_mutations("ATGC", "atgc").unwrap(), 0);
/// assert!(count_mutations("ATGC", "ATGCA").is_err());
/// ```
pub fn count_mutations(reference: &str, candidate: &str) -> Result<usize, SequenceError> {
    let reference = reference.as_bytes();
    let candidate = candidate.as_bytes();

    if candidate.len() != reference.len() {
        return Err(SequenceError::LengthMismatch {
            expected: reference.len(),
            found: candidate.len(),
        });
    }

    Ok(reference
        .iter()
        .zip(candidate)
        .filter(|&(r, c)| !r.eq_ignore_ascii_case(c))
        .count())
}
