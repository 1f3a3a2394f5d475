use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, read_inputs, OutputFormat};
use crate::core::types::Subject;
use crate::report::text::format_gene_report;
use crate::report::{screen_sequences, GeneFinding};
use crate::utils::validation::parse_sequence;

#[derive(Args)]
pub struct ScreenArgs {
    /// Sequences to screen, numbered from 1 in the order given
    pub sequences: Vec<String>,

    /// Read more sequences from a list or FASTA file ('-' for stdin); may be repeated
    #[arg(short, long = "input")]
    pub inputs: Vec<PathBuf>,

    /// Path to custom marker catalog file
    #[arg(long)]
    pub markers: Option<PathBuf>,
}

/// Execute screen subcommand
///
/// # Errors
///
/// Returns an error if a sequence is invalid, an input cannot be read, or
/// the marker catalog fails to load.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScreenArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut sequences = args
        .sequences
        .iter()
        .enumerate()
        .map(|(i, s)| parse_sequence(s).map_err(|e| anyhow::anyhow!("Sequence #{}: {e}", i + 1)))
        .collect::<anyhow::Result<Vec<String>>>()?;
    let from_files = read_inputs(&args.inputs, sequences.len())?;
    sequences.extend(from_files.into_iter().map(|s| s.sequence));

    if sequences.is_empty() {
        anyhow::bail!("No sequences to screen");
    }

    let catalog = load_catalog(args.markers.as_deref(), verbose)?;
    let findings = screen_sequences(
        &catalog,
        sequences
            .iter()
            .enumerate()
            .map(|(i, s)| (Subject::Candidate(i + 1), s.as_str())),
    );

    if verbose {
        let flagged = findings.iter().filter(|f| !f.is_normal()).count();
        eprintln!("{flagged} of {} sequences matched a marker", findings.len());
    }

    match format {
        OutputFormat::Text => print!("{}", format_gene_report(&findings)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&findings)?),
        OutputFormat::Tsv => print_tsv(&findings),
    }

    Ok(())
}

fn print_tsv(findings: &[GeneFinding]) {
    println!("index\tstatus\tgenes");
    for finding in findings {
        let index = match finding.subject {
            Subject::Candidate(index) => index,
            Subject::Reference => 0,
        };
        if finding.is_normal() {
            println!("{index}\tnormal\t.");
        } else {
            println!("{index}\tflagged\t{}", finding.genes.join(";"));
        }
    }
}
