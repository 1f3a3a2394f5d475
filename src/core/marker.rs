use serde::{Deserialize, Serialize};

/// A known disease-associated subsequence and the gene it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    /// Marker subsequence, uppercase
    pub sequence: String,

    /// Gene label reported when the marker is found (e.g. "PSEN1 (M146L)")
    pub gene: String,
}

impl MarkerEntry {
    pub fn new(sequence: impl Into<String>, gene: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            gene: gene.into(),
        }
    }

    /// Whether `query` contains this marker as a contiguous substring.
    ///
    /// `query` is expected to be uppercase already.
    #[must_use]
    pub fn is_contained_in(&self, query: &str) -> bool {
        query.contains(self.sequence.as_str())
    }
}
