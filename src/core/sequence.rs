use serde::{Deserialize, Serialize};

/// A candidate sequence with its mutation count relative to the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Uppercase sequence over A, T, G, C and -
    pub sequence: String,

    /// Positions differing from the reference
    pub mutation_count: usize,

    /// 1-based insertion index
    pub index: usize,
}

impl SequenceRecord {
    pub fn new(sequence: impl Into<String>, mutation_count: usize, index: usize) -> Self {
        Self {
            sequence: sequence.into(),
            mutation_count,
            index,
        }
    }

    /// Similarity to a reference of `reference_len` bases, as a percentage.
    ///
    /// `(1 - mutation_count / reference_len) * 100`; an empty reference yields 0.
    #[must_use]
    pub fn similarity(&self, reference_len: usize) -> f64 {
        similarity_percent(self.mutation_count, reference_len)
    }
}

/// `(1 - mutation_count / reference_len) * 100`
#[must_use]
pub fn similarity_percent(mutation_count: usize, reference_len: usize) -> f64 {
    use crate::utils::validation::count_to_f64;

    if reference_len == 0 {
        return 0.0;
    }
    (1.0 - count_to_f64(mutation_count) / count_to_f64(reference_len)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity() {
        assert!((similarity_percent(1, 4) - 75.0).abs() < 1e-9);
        assert!((similarity_percent(0, 4) - 100.0).abs() < 1e-9);
        assert!((similarity_percent(4, 4) - 0.0).abs() < 1e-9);
        assert!((similarity_percent(1, 3) - 66.666_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_empty_reference() {
        assert!(similarity_percent(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_similarity() {
        let record = SequenceRecord::new("ATGG", 1, 1);
        assert_eq!(format!("{:.2}", record.similarity(4)), "75.00");
    }
}
