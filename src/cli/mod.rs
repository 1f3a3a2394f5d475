//! Command-line interface for mutscreen.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Rank candidate sequences against a reference and screen them for markers
//! - **screen**: Screen sequences for markers only
//! - **markers**: List, dump or export the marker catalog
//! - **interactive**: Prompt for the reference and candidates on the console
//!
//! ## Usage
//!
//! ```text
//! # Rank two candidates against a reference
//! mutscreen analyze ATGCTCGGA ATGCTCGGT TTGCTCGGA
//!
//! # Candidates from a FASTA file, JSON output
//! mutscreen analyze ATGCTCGGA --input candidates.fa --format json
//!
//! # Screen sequences with a custom marker table
//! mutscreen screen ATGCTCGGAAT --markers my_markers.json
//!
//! # Export the embedded marker table
//! mutscreen markers export markers.json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::marker_tree::MarkerCatalog;
use crate::catalog::store::MarkerSet;
use crate::parsing::{self, NamedSequence};

pub mod analyze;
pub mod interactive;
pub mod markers;
pub mod screen;

#[derive(Parser)]
#[command(name = "mutscreen")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Rank DNA sequences against a reference and screen them for known markers")]
#[command(
    long_about = "mutscreen compares DNA sequences with a reference sequence.\n\nIt provides:\n- A ranking of candidates by mutation count and similarity\n- The structure of the underlying rank tree\n- Screening of every sequence against a catalog of disease-associated markers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank sequences by similarity to a reference and screen them for markers
    Analyze(analyze::AnalyzeArgs),

    /// Screen sequences against the marker catalog
    Screen(screen::ScreenArgs),

    /// Inspect the marker catalog
    Markers(markers::MarkersArgs),

    /// Enter the reference and candidates interactively
    Interactive(interactive::InteractiveArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Build the marker catalog from `path`, or from the embedded table
pub(crate) fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<MarkerCatalog> {
    let markers = MarkerSet::load(path)?;
    let catalog = MarkerCatalog::new(&markers);

    if verbose {
        eprintln!(
            "Loaded marker catalog with {} markers ({} unique)",
            markers.len(),
            catalog.len()
        );
    }

    Ok(catalog)
}

/// Read every sequence from `inputs`; `-` reads a plain list from stdin.
///
/// `preceding` is the number of sequences already given on the command line.
/// Together with every file read it counts toward
/// [`MAX_SEQUENCES`](crate::utils::validation::MAX_SEQUENCES).
pub(crate) fn read_inputs(
    inputs: &[PathBuf],
    preceding: usize,
) -> anyhow::Result<Vec<NamedSequence>> {
    parsing::check_total(preceding)?;

    let mut sequences = Vec::new();
    for input in inputs {
        let parsed = if input.to_string_lossy() == "-" {
            parsing::list::parse_list_reader(std::io::stdin().lock())?
        } else {
            parsing::read_sequences(input)
                .map_err(|e| anyhow::anyhow!("{}: {e}", input.display()))?
        };
        sequences.extend(parsed);
        parsing::check_total(preceding + sequences.len())?;
    }
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ParseError;
    use crate::utils::validation::MAX_SEQUENCES;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn list_file(lines: usize) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all("ACGT\n".repeat(lines).as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    fn too_many(result: anyhow::Result<Vec<NamedSequence>>) -> bool {
        matches!(
            result.unwrap_err().downcast_ref::<ParseError>(),
            Some(ParseError::TooManySequences(_))
        )
    }

    #[test]
    fn test_read_inputs_combines_files() {
        let a = list_file(2);
        let b = list_file(3);
        let inputs = [a.path().to_path_buf(), b.path().to_path_buf()];
        let sequences = read_inputs(&inputs, 1).unwrap();
        assert_eq!(sequences.len(), 5);
    }

    #[test]
    fn test_read_inputs_limit_spans_files() {
        let half = MAX_SEQUENCES / 2 + 1;
        let a = list_file(half);
        let b = list_file(half);
        let result = read_inputs(&[a.path().to_path_buf(), b.path().to_path_buf()], 0);
        assert!(too_many(result));
    }

    #[test]
    fn test_read_inputs_limit_counts_literals() {
        let one = list_file(1);
        assert!(too_many(read_inputs(&[one.path().to_path_buf()], MAX_SEQUENCES)));
        assert!(too_many(read_inputs(&[], MAX_SEQUENCES + 1)));
        assert!(read_inputs(&[], MAX_SEQUENCES).unwrap().is_empty());
    }
}
