use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::marker_tree::MarkerCatalog;
use crate::catalog::store::MarkerSet;
use crate::cli::OutputFormat;
use crate::report::text::format_marker_tree;

#[derive(Args)]
pub struct MarkersArgs {
    #[command(subcommand)]
    pub command: MarkersCommands,
}

#[derive(Subcommand)]
pub enum MarkersCommands {
    /// List all markers in sequence order
    List {
        /// Path to custom marker catalog file
        #[arg(long)]
        markers: Option<PathBuf>,
    },

    /// Show the structure of the marker tree
    Tree {
        /// Path to custom marker catalog file
        #[arg(long)]
        markers: Option<PathBuf>,
    },

    /// Export the marker catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom marker catalog file to export (defaults to embedded)
        #[arg(long)]
        markers: Option<PathBuf>,
    },
}

/// Execute markers subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the export cannot be written.
pub fn run(args: MarkersArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        MarkersCommands::List { markers } => run_list(markers, format, verbose),
        MarkersCommands::Tree { markers } => run_tree(markers, format, verbose),
        MarkersCommands::Export { output, markers } => run_export(output, markers),
    }
}

fn run_list(path: Option<PathBuf>, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(path.as_deref(), verbose)?;

    match format {
        OutputFormat::Text => {
            println!("{:<20} Gene", "Marker");
            println!("{}", "-".repeat(40));
            for marker in catalog.iter() {
                println!("{:<20} {}", marker.sequence, marker.gene);
            }
            println!("\nTotal: {} markers", catalog.len());
        }
        OutputFormat::Json => {
            let markers: Vec<_> = catalog.iter().collect();
            println!("{}", serde_json::to_string_pretty(&markers)?);
        }
        OutputFormat::Tsv => {
            println!("sequence\tgene");
            for marker in catalog.iter() {
                println!("{}\t{}", marker.sequence, marker.gene);
            }
        }
    }

    Ok(())
}

fn run_tree(path: Option<PathBuf>, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(path.as_deref(), verbose)?;

    match format {
        OutputFormat::Text => print!("{}", format_marker_tree(&catalog)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog.structure())?),
        OutputFormat::Tsv => {
            println!("depth\tbranch\tsequence\tgene");
            for node in catalog.structure() {
                println!(
                    "{}\t{}\t{}\t{}",
                    node.depth, node.branch, node.sequence, node.gene
                );
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, path: Option<PathBuf>) -> anyhow::Result<()> {
    let markers = MarkerSet::load(path.as_deref())?;

    let json = markers.to_json()?;
    std::fs::write(&output, json)?;

    // Catalog count reflects duplicates being collapsed on load
    let unique = MarkerCatalog::new(&markers).len();
    println!(
        "Exported {} markers ({unique} unique) to {}",
        markers.len(),
        output.display()
    );

    Ok(())
}
