//! Command-line interface for genome-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find where a DNA fragment occurs in a set of genomes
//! - **related**: Rank genomes by how much of a query genome they contain
//! - **genomes**: List the genomes that would be indexed
//!
//! ## Usage
//!
//! ```text
//! # Locate a fragment, allowing one substitution
//! genome-matcher search ACGTACGTTGCAAC -g bacteria.fa
//!
//! # Exact matches of at least 12 bases, as JSON
//! genome-matcher search ACGTACGTTGCAAC -g bacteria.fa --minimum-length 12 --exact-only --format json
//!
//! # Relatedness of every record in a query file
//! genome-matcher related query.fa -g bacteria.fa --fragment-length 20 --threshold 10
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::core::Genome;
use crate::matching::{FragmentMatcher, MatcherConfig};
use crate::parsing::fasta::{is_fasta_file, parse_fasta_file, parse_fasta_stdin};

pub mod genomes;
pub mod related;
pub mod search;

#[derive(Parser)]
#[command(name = "genome-matcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Locate DNA fragments and find related genomes")]
#[command(
    long_about = "genome-matcher indexes every k-mer of a set of genomes and answers two questions:\n- Where does this DNA fragment occur, allowing at most one substitution?\n- What share of a query genome's fragments does each indexed genome contain?"
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

    /// Path to a JSON config file with matcher defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the genomes containing a DNA fragment
    Search(search::SearchArgs),

    /// Rank genomes by relatedness to a query genome
    Related(related::RelatedArgs),

    /// List the genomes in the given FASTA files
    Genomes(genomes::GenomesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the config file if one was given, otherwise the defaults
///
/// # Errors
///
/// Returns an error if the config file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    match path {
        Some(path) => Ok(MatcherConfig::load_from_file(path)?),
        None => Ok(MatcherConfig::default()),
    }
}

/// Read genomes from a FASTA path, or standard input for `-`
///
/// # Errors
///
/// Returns an error if the input cannot be parsed.
pub fn read_genomes(path: &Path) -> anyhow::Result<Vec<Genome>> {
    let genomes = if path.as_os_str() == "-" {
        parse_fasta_stdin()?
    } else {
        if !is_fasta_file(path) {
            warn!(path = %path.display(), "Unrecognized FASTA extension, parsing anyway");
        }
        parse_fasta_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", path.display()))?
    };
    Ok(genomes)
}

/// Build a matcher over every genome in `paths`
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or a genome cannot be indexed.
pub fn build_matcher(paths: &[PathBuf], min_search_length: usize) -> anyhow::Result<FragmentMatcher> {
    let mut matcher = FragmentMatcher::new(min_search_length)?;
    for path in paths {
        for genome in read_genomes(path)? {
            matcher.add_genome(&genome)?;
        }
    }

    info!(
        genomes = matcher.genome_count(),
        min_search_length,
        "Built fragment index"
    );
    Ok(matcher)
}
