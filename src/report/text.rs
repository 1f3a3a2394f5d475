use crate::catalog::marker_tree::MarkerCatalog;
use crate::core::types::BranchLabel;
use crate::matching::engine::MutationAnalyzer;
use crate::matching::rank_tree::RankTree;

use super::{AnalysisReport, GeneFinding, RankedEntry};

/// Width of one indentation level in tree dumps
const INDENT: usize = 4;

/// Separator between report sections
pub const RULE: &str = "--------------------------------";

fn tree_line(depth: usize, branch: BranchLabel, body: &str) -> String {
    format!(
        "{:width$}{}{body}\n",
        "",
        branch.prefix(),
        width = depth * INDENT
    )
}

/// Indented pre-order dump of the rank tree, one node per line:
///
/// ```text
/// Root: Seq #1 (Mutations: 3)
///     L--- Seq #2 (Mutations: 1)
///     R--- Seq #3 (Mutations: 3)
/// ```
#[must_use]
pub fn format_rank_tree(tree: &RankTree) -> String {
    tree.dump_structure()
        .map(|(depth, branch, record)| {
            let body = format!(
                "Seq #{} (Mutations: {})",
                record.index, record.mutation_count
            );
            tree_line(depth, branch, &body)
        })
        .collect()
}

/// Indented pre-order dump of the marker catalog
#[must_use]
pub fn format_marker_tree(catalog: &MarkerCatalog) -> String {
    catalog
        .dump_structure()
        .map(|(depth, branch, marker)| {
            tree_line(depth, branch, &format!("{} ({})", marker.sequence, marker.gene))
        })
        .collect()
}

/// Ranked list, similarity with two decimals
#[must_use]
pub fn format_ranking(ranking: &[RankedEntry]) -> String {
    ranking
        .iter()
        .map(|entry| {
            format!(
                "Rank {}:\nSequence #{}: {}\nMutations: {}\nSimilarity: {:.2}%\n{RULE}\n",
                entry.rank, entry.index, entry.sequence, entry.mutation_count, entry.similarity
            )
        })
        .collect()
}

/// One line per sequence: either its matched genes or `IS NORMAL`
#[must_use]
pub fn format_gene_report(findings: &[GeneFinding]) -> String {
    findings
        .iter()
        .map(|finding| {
            if finding.is_normal() {
                format!("{}: IS NORMAL\n", finding.subject)
            } else {
                format!(
                    "{}: INDICATES MUTATIONS IN GENE(S): {}\n",
                    finding.subject,
                    finding.genes.join(", ")
                )
            }
        })
        .collect()
}

/// Tab-separated ranking, one row per candidate.
///
/// The `genes` column is `normal` when screening found nothing, the matched
/// genes joined by `;`, or `.` when screening was skipped.
#[must_use]
pub fn format_ranking_tsv(report: &AnalysisReport) -> String {
    let mut out = String::from("rank\tindex\tmutations\tsimilarity\tgenes\tsequence\n");
    for entry in &report.ranking {
        let genes = match report.genes_for(entry.index) {
            Some([]) => "normal".to_string(),
            Some(genes) => genes.join(";"),
            None => ".".to_string(),
        };
        out.push_str(&format!(
            "{}\t{}\t{}\t{:.2}\t{}\t{}\n",
            entry.rank, entry.index, entry.mutation_count, entry.similarity, genes, entry.sequence
        ));
    }
    out
}

/// Full console report: reference, tree dumps (if `show_trees`), ranking and,
/// when a catalog is given, the screening results.
#[must_use]
pub fn format_analysis(
    analyzer: &MutationAnalyzer,
    catalog: Option<&MarkerCatalog>,
    show_trees: bool,
) -> String {
    let mut out = format!("Reference sequence: {}\n", analyzer.reference());

    if show_trees {
        out.push_str(&format!("\nDNA Mutation Tree Structure:\n{RULE}\n"));
        out.push_str(&format_rank_tree(analyzer.tree()));
        out.push_str(&format!("{RULE}\n"));
    }

    out.push_str(&format!("\nAnalysis Results (sorted by relevance):\n{RULE}\n"));
    out.push_str(&format_ranking(&analyzer.ranking()));

    if let Some(catalog) = catalog {
        if show_trees {
            out.push_str(&format!("\nGene Marker Tree:\n{RULE}\n"));
            out.push_str(&format_marker_tree(catalog));
            out.push_str(&format!("{RULE}\n"));
        }
        out.push_str("\nGene Screening:\n");
        out.push_str(&format_gene_report(&analyzer.screen(catalog)));
    }

    out
}
