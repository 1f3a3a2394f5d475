use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{load_catalog, read_inputs, OutputFormat};
use crate::matching::engine::MutationAnalyzer;
use crate::parsing;
use crate::report::text::{format_analysis, format_ranking_tsv};
use crate::report::AnalysisReport;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Reference sequence, or @FILE to use the first sequence of a list or FASTA file
    #[arg(required = true)]
    pub reference: String,

    /// Candidate sequences, numbered from 1 in the order given
    pub candidates: Vec<String>,

    /// Read more candidates from a list or FASTA file ('-' for stdin); may be repeated
    #[arg(short, long = "input")]
    pub inputs: Vec<PathBuf>,

    /// Path to custom marker catalog file
    #[arg(long)]
    pub markers: Option<PathBuf>,

    /// Skip marker screening
    #[arg(long)]
    pub no_screen: bool,

    /// Do not print the tree structures
    #[arg(long)]
    pub no_tree: bool,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the reference or any candidate is invalid, an input
/// file cannot be read, or the marker catalog fails to load.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = resolve_reference(&args.reference)?;
    let mut analyzer = MutationAnalyzer::new(&reference)
        .map_err(|e| anyhow::anyhow!("Invalid reference sequence: {e}"))?;

    let from_files = read_inputs(&args.inputs, args.candidates.len())?;
    let candidates: Vec<&str> = args
        .candidates
        .iter()
        .map(String::as_str)
        .chain(from_files.iter().map(|s| s.sequence.as_str()))
        .collect();

    if candidates.is_empty() {
        eprintln!("Warning: No candidate sequences given, only the reference will be reported.");
    }

    analyzer
        .add_sequences(&candidates)
        .map_err(|(index, e)| anyhow::anyhow!("Sequence #{index}: {e}"))?;

    if verbose {
        eprintln!(
            "Ranked {} sequences against a {}-base reference (tree height {})",
            analyzer.tree().len(),
            analyzer.reference().len(),
            analyzer.tree().height()
        );
    }

    let catalog = if args.no_screen {
        None
    } else {
        Some(load_catalog(args.markers.as_deref(), verbose)?)
    };

    match format {
        OutputFormat::Text => print!(
            "{}",
            format_analysis(&analyzer, catalog.as_ref(), !args.no_tree)
        ),
        OutputFormat::Json => {
            let report = AnalysisReport::build(&analyzer, catalog.as_ref());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Tsv => print!(
            "{}",
            format_ranking_tsv(&AnalysisReport::build(&analyzer, catalog.as_ref()))
        ),
    }

    Ok(())
}

/// A literal sequence, or the first sequence of the file named after `@`
fn resolve_reference(arg: &str) -> anyhow::Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let sequences = parsing::read_sequences(Path::new(path))
                .map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
            sequences
                .into_iter()
                .next()
                .map(|s| s.sequence)
                .ok_or_else(|| anyhow::anyhow!("{path}: no reference sequence found"))
        }
        None => Ok(arg.to_string()),
    }
}
