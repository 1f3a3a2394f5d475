//! Ranking and screening reports.
//!
//! These are views over the two trees; nothing here holds state.
//!
//! - [`render_ranking`]: ranked records with similarity percentages
//! - [`render_gene_report`]: per-sequence marker findings, reference first
//! - [`AnalysisReport`]: both of the above plus tree dumps, for JSON output
//! - [`text`]: plain-text renderers for the console

use serde::Serialize;

use crate::catalog::marker_tree::{MarkerCatalog, MarkerTreeNode};
use crate::core::sequence::similarity_percent;
use crate::core::types::Subject;
use crate::matching::engine::MutationAnalyzer;
use crate::matching::rank_tree::{RankTree, RankTreeNode};

pub mod text;

/// One line of the similarity ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based rank
    pub rank: usize,

    /// 1-based insertion index of the sequence
    pub index: usize,

    pub sequence: String,

    pub mutation_count: usize,

    /// `(1 - mutation_count / reference_len) * 100`
    pub similarity: f64,
}

/// Markers found in one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneFinding {
    pub subject: Subject,

    /// Matched gene labels in catalog scan order; empty when normal
    pub genes: Vec<String>,
}

impl GeneFinding {
    /// No marker was found
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Rank the records of `tree` in ascending mutation count.
#[must_use]
pub fn render_ranking(tree: &RankTree, reference_len: usize) -> Vec<RankedEntry> {
    tree.traverse_ascending()
        .enumerate()
        .map(|(i, record)| RankedEntry {
            rank: i + 1,
            index: record.index,
            sequence: record.sequence.clone(),
            mutation_count: record.mutation_count,
            similarity: similarity_percent(record.mutation_count, reference_len),
        })
        .collect()
}

/// Screen each `(subject, sequence)` pair against `catalog`, in the order given.
pub fn screen_sequences<'a, I>(catalog: &MarkerCatalog, sequences: I) -> Vec<GeneFinding>
where
    I: IntoIterator<Item = (Subject, &'a str)>,
{
    sequences
        .into_iter()
        .map(|(subject, sequence)| GeneFinding {
            subject,
            genes: catalog
                .find_matches(sequence)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Screen the reference and then each `(index, sequence)` candidate, in the
/// order given.
pub fn render_gene_report<'a, I>(
    catalog: &MarkerCatalog,
    reference: &'a str,
    candidates: I,
) -> Vec<GeneFinding>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    screen_sequences(
        catalog,
        std::iter::once((Subject::Reference, reference)).chain(
            candidates
                .into_iter()
                .map(|(index, sequence)| (Subject::Candidate(index), sequence)),
        ),
    )
}

/// Everything a full analysis reports, in serializable form
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub reference: String,
    pub reference_length: usize,
    pub rank_tree: Vec<RankTreeNode>,
    pub ranking: Vec<RankedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_tree: Option<Vec<MarkerTreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<GeneFinding>>,
}

impl AnalysisReport {
    /// Collect the report for `analyzer`; screening is skipped when `catalog` is `None`.
    #[must_use]
    pub fn build(analyzer: &MutationAnalyzer, catalog: Option<&MarkerCatalog>) -> Self {
        Self {
            reference: analyzer.reference().to_string(),
            reference_length: analyzer.reference().len(),
            rank_tree: analyzer.tree().structure(),
            ranking: analyzer.ranking(),
            marker_tree: catalog.map(MarkerCatalog::structure),
            findings: catalog.map(|c| analyzer.screen(c)),
        }
    }

    /// Genes found for candidate `index`, if screening ran
    #[must_use]
    pub fn genes_for(&self, index: usize) -> Option<&[String]> {
        self.findings.as_ref().and_then(|findings| {
            findings
                .iter()
                .find(|f| f.subject == Subject::Candidate(index))
                .map(|f| f.genes.as_slice())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ranking() {
        let mut tree = RankTree::new();
        tree.insert("ATGG", 1, 1);
        tree.insert("ATGC", 0, 2);
        tree.insert("TTGG", 2, 3);

        let ranking = render_ranking(&tree, 4);
        let summary: Vec<(usize, usize, String)> = ranking
            .iter()
            .map(|e| (e.rank, e.index, format!("{:.2}", e.similarity)))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, 2, "100.00".to_string()),
                (2, 1, "75.00".to_string()),
                (3, 3, "50.00".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_ranking_empty() {
        assert!(render_ranking(&RankTree::new(), 4).is_empty());
    }

    #[test]
    fn test_render_gene_report() {
        let catalog = MarkerCatalog::load_embedded().unwrap();
        let findings = render_gene_report(
            &catalog,
            "ATGC",
            vec![(1, "XATGCTCGGAX"), (2, "aacattggc")],
        );

        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].subject, Subject::Reference);
        assert!(findings[0].is_normal());
        assert_eq!(findings[1].genes, vec!["PSEN1 (M146L)".to_string()]);
        assert_eq!(findings[2].subject, Subject::Candidate(2));
        assert_eq!(findings[2].genes, vec!["PSEN2".to_string()]);
    }

    #[test]
    fn test_screen_sequences_keeps_order() {
        let catalog = MarkerCatalog::load_embedded().unwrap();
        let findings = screen_sequences(
            &catalog,
            vec![
                (Subject::Candidate(2), "CTGGTCTTC"),
                (Subject::Candidate(1), "ATGC"),
            ],
        );
        assert_eq!(findings[0].subject, Subject::Candidate(2));
        assert_eq!(findings[0].genes, vec!["PSEN1 (L286V)".to_string()]);
        assert!(findings[1].is_normal());
    }

    #[test]
    fn test_analysis_report() {
        let mut analyzer = MutationAnalyzer::new("ATGCTCGGAA").unwrap();
        analyzer.add_sequences(["ATGCTCGGAT", "TTTTTTTTTT"]).unwrap();
        let catalog = MarkerCatalog::load_embedded().unwrap();

        let report = AnalysisReport::build(&analyzer, Some(&catalog));
        assert_eq!(report.reference_length, 10);
        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.ranking[0].index, 1);
        assert_eq!(report.rank_tree.len(), 2);
        assert_eq!(report.marker_tree.as_ref().map(Vec::len), Some(5));
        assert_eq!(report.genes_for(1), Some(&["PSEN1 (M146L)".to_string()][..]));
        assert_eq!(report.genes_for(2).map(<[String]>::is_empty), Some(true));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ranking"][0]["mutation_count"], 1);
        assert_eq!(json["findings"][0]["subject"], "reference");
        assert_eq!(json["findings"][1]["subject"]["candidate"], 1);
    }

    #[test]
    fn test_analysis_report_without_screening() {
        let analyzer = MutationAnalyzer::new("ATGC").unwrap();
        let report = AnalysisReport::build(&analyzer, None);
        assert!(report.findings.is_none());
        assert!(report.genes_for(1).is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("findings").is_none());
    }
}
