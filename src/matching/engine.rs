use tracing::debug;

use crate::catalog::marker_tree::MarkerCatalog;
use crate::matching::mutation::count_mutations;
use crate::matching::rank_tree::RankTree;
use crate::report::{self, GeneFinding, RankedEntry};
use crate::utils::validation::{parse_sequence, SequenceError};

/// Owns the reference sequence and the rank tree built against it
#[derive(Debug, Clone)]
pub struct MutationAnalyzer {
    reference: String,
    tree: RankTree,
    /// Normalized candidates in insertion order, for screening
    candidates: Vec<(usize, String)>,
}

impl MutationAnalyzer {
    /// Create an analyzer for `reference`.
    ///
    /// The reference is uppercased and must be a non-empty sequence over
    /// A, T, G, C and -.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` or `SequenceError::InvalidAlphabet`.
    pub fn new(reference: &str) -> Result<Self, SequenceError> {
        let reference = parse_sequence(reference)?;
        debug!(length = reference.len(), "reference sequence set");
        Ok(Self {
            reference,
            tree: RankTree::new(),
            candidates: Vec::new(),
        })
    }

    /// Validate `candidate`, count its mutations and insert it into the rank tree.
    ///
    /// Returns the mutation count. Nothing is inserted on error.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidAlphabet` or `SequenceError::Empty` for a
    /// malformed sequence, and `SequenceError::LengthMismatch` if its length
    /// differs from the reference.
    pub fn add_sequence(&mut self, candidate: &str, index: usize) -> Result<usize, SequenceError> {
        let candidate = parse_sequence(candidate)?;
        let mutations = count_mutations(&self.reference, &candidate)?;

        self.tree.insert(candidate.clone(), mutations, index);
        self.candidates.push((index, candidate));
        Ok(mutations)
    }

    /// Add candidates in order with 1-based indices continuing from the
    /// sequences already added. Stops at the first invalid sequence.
    ///
    /// # Errors
    ///
    /// Returns the first validation error together with the index it was
    /// assigned.
    pub fn add_sequences<I, S>(&mut self, candidates: I) -> Result<(), (usize, SequenceError)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for candidate in candidates {
            let index = self.next_index();
            self.add_sequence(candidate.as_ref(), index)
                .map_err(|e| (index, e))?;
        }
        Ok(())
    }

    /// Index the next candidate will receive from [`MutationAnalyzer::add_sequences`]
    pub fn next_index(&self) -> usize {
        self.candidates.len() + 1
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn tree(&self) -> &RankTree {
        &self.tree
    }

    /// Candidates in insertion order as `(index, sequence)`
    pub fn candidates(&self) -> &[(usize, String)] {
        &self.candidates
    }

    /// Ranking in ascending mutation count
    pub fn ranking(&self) -> Vec<RankedEntry> {
        report::render_ranking(&self.tree, self.reference.len())
    }

    /// Screen the reference and every candidate against `catalog`
    pub fn screen(&self, catalog: &MarkerCatalog) -> Vec<GeneFinding> {
        report::render_gene_report(
            catalog,
            &self.reference,
            self.candidates
                .iter()
                .map(|(index, sequence)| (*index, sequence.as_str())),
        )
    }
}
