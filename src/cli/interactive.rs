//! Console session that prompts for the reference and each candidate.
//!
//! Invalid input never aborts the session: the error is printed and the same
//! prompt is asked again. End of input does abort it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::matching::engine::MutationAnalyzer;
use crate::report::text::{format_analysis, format_ranking_tsv};
use crate::report::AnalysisReport;
use crate::utils::validation::{SequenceError, MAX_SEQUENCES};

#[derive(Args)]
pub struct InteractiveArgs {
    /// Path to custom marker catalog file
    #[arg(long)]
    pub markers: Option<PathBuf>,
}

/// Execute interactive subcommand: prompts on stderr, report on stdout
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, stdin closes before all
/// sequences are entered, or writing to stdout fails.
pub fn run(args: &InteractiveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(args.markers.as_deref(), false)?;

    // Prompts go to stderr so the report on stdout stays machine-readable
    let analyzer = collect_sequences(&mut std::io::stdin().lock(), &mut std::io::stderr())?;
    let mut out = std::io::stdout().lock();

    match format {
        OutputFormat::Text => {
            write!(out, "\n{}", format_analysis(&analyzer, Some(&catalog), true))?;
        }
        OutputFormat::Json => {
            let report = AnalysisReport::build(&analyzer, Some(&catalog));
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Tsv => {
            let report = AnalysisReport::build(&analyzer, Some(&catalog));
            write!(out, "{}", format_ranking_tsv(&report))?;
        }
    }

    Ok(())
}

/// Prompt for a reference, a count and that many candidates, re-prompting on
/// every invalid answer.
///
/// # Errors
///
/// Returns an error on end of input or an I/O failure.
pub fn collect_sequences<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<MutationAnalyzer> {
    write!(out, "Enter reference DNA sequence: ")?;
    let mut analyzer = loop {
        let line = read_answer(input, out)?;
        match MutationAnalyzer::new(&line) {
            Ok(analyzer) => break analyzer,
            Err(e) => write!(out, "{}", retry_message(&e))?,
        }
    };

    write!(out, "Enter number of DNA sequences to compare: ")?;
    let count = loop {
        let line = read_answer(input, out)?;
        match line.parse::<usize>() {
            Ok(n) if n <= MAX_SEQUENCES => break n,
            _ => write!(
                out,
                "Error: Enter a whole number between 0 and {MAX_SEQUENCES}. Please re-enter: "
            )?,
        }
    };

    for index in 1..=count {
        write!(out, "Enter sequence {index}: ")?;
        loop {
            let line = read_answer(input, out)?;
            match analyzer.add_sequence(&line, index) {
                Ok(_) => break,
                Err(e) => write!(out, "{}", retry_message(&e))?,
            }
        }
    }

    Ok(analyzer)
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<String> {
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn retry_message(error: &SequenceError) -> String {
    format!("Error: {error}. Please re-enter: ")
}
