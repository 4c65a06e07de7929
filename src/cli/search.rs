//! Search command - locate a DNA fragment across a set of genomes.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{build_matcher, load_config, OutputFormat};
use crate::core::DnaMatch;
use crate::matching::MatchError;
use crate::utils::validation::normalize_base;

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// DNA fragment to search for (A, C, G, T, N; case-insensitive)
    #[arg(required = true)]
    pub fragment: String,

    /// FASTA files with the genomes to search (use '-' for stdin)
    #[arg(short, long = "genomes", required = true, num_args = 1..)]
    pub genomes: Vec<PathBuf>,

    /// Length of the indexed k-mers (overrides the config file)
    #[arg(long)]
    pub min_search_length: Option<usize>,

    /// Shortest match to report (defaults to the k-mer length)
    #[arg(long)]
    pub minimum_length: Option<usize>,

    /// Only report exact matches
    #[arg(long)]
    pub exact_only: bool,
}

/// Execute the search command
///
/// # Errors
///
/// Returns an error if the inputs cannot be read or the arguments are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: SearchArgs,
    format: OutputFormat,
    config: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    let config = load_config(config.as_deref())?;
    let min_search_length = args.min_search_length.unwrap_or(config.min_search_length);
    let minimum_length = args.minimum_length.unwrap_or(min_search_length);
    let exact_match_only = args.exact_only || config.exact_match_only;

    let fragment = args
        .fragment
        .bytes()
        .map(|b| {
            normalize_base(b).ok_or_else(|| {
                anyhow::anyhow!("Invalid base '{}' in fragment", char::from(b))
            })
        })
        .collect::<anyhow::Result<Vec<u8>>>()?;

    let matcher = build_matcher(&args.genomes, min_search_length)?;

    if verbose {
        eprintln!(
            "Indexed {} genomes with k={min_search_length}; searching {} bases (minimum {minimum_length}, {})",
            matcher.genome_count(),
            fragment.len(),
            if exact_match_only { "exact" } else { "one substitution allowed" },
        );
    }

    let matches = match matcher.find_genomes_with_this_dna(&fragment, minimum_length, exact_match_only) {
        Ok(matches) => matches,
        Err(MatchError::NoMatch) => {
            eprintln!("No matching genomes found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(matches: &[DnaMatch]) {
    println!("Fragment Matches");
    println!("{}", "=".repeat(60));
    for m in matches {
        println!(
            "  {}: length {} at position {}",
            m.genome_name, m.length, m.position
        );
    }
}

fn print_json_results(matches: &[DnaMatch]) -> anyhow::Result<()> {
    let output = serde_json::json!({ "matches": matches });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[DnaMatch]) {
    println!("genome\tposition\tlength");
    for m in matches {
        println!("{}\t{}\t{}", m.genome_name, m.position, m.length);
    }
}
