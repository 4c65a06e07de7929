//! Related command - rank indexed genomes by how much of a query they share.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{build_matcher, load_config, read_genomes, OutputFormat};
use crate::core::GenomeMatch;
use crate::matching::MatchError;
use crate::utils::validation::is_valid_percent;

/// Arguments for the related command
#[derive(Args)]
pub struct RelatedArgs {
    /// FASTA file with one or more query genomes (use '-' for stdin)
    #[arg(required = true)]
    pub query: PathBuf,

    /// FASTA files with the genomes to compare against
    #[arg(short, long = "genomes", required = true, num_args = 1..)]
    pub genomes: Vec<PathBuf>,

    /// Length of the indexed k-mers (overrides the config file)
    #[arg(long)]
    pub min_search_length: Option<usize>,

    /// Length of the query chunks (overrides the config file)
    #[arg(long)]
    pub fragment_length: Option<usize>,

    /// Minimum percentage of matching chunks to report a genome (0-100)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Only count exact chunk matches
    #[arg(long)]
    pub exact_only: bool,
}

/// Relatedness results for one query record
struct QueryResult {
    query_name: String,
    matches: Vec<GenomeMatch>,
}

/// Execute the related command
///
/// # Errors
///
/// Returns an error if the inputs cannot be read or the arguments are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: RelatedArgs,
    format: OutputFormat,
    config: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    let config = load_config(config.as_deref())?;
    let min_search_length = args.min_search_length.unwrap_or(config.min_search_length);
    let fragment_length = args
        .fragment_length
        .unwrap_or(config.fragment_match_length);
    let threshold = args.threshold.unwrap_or(config.match_percent_threshold);
    let exact_match_only = args.exact_only || config.exact_match_only;

    if !is_valid_percent(threshold) {
        anyhow::bail!("Threshold must be between 0 and 100, got {threshold}");
    }

    let queries = read_genomes(&args.query)?;
    let matcher = build_matcher(&args.genomes, min_search_length)?;

    if verbose {
        eprintln!(
            "Indexed {} genomes with k={min_search_length}; {} queries in chunks of {fragment_length} (threshold {threshold:.1}%)",
            matcher.genome_count(),
            queries.len(),
        );
    }

    let mut results = Vec::with_capacity(queries.len());
    for query in &queries {
        let matches = match matcher.find_related_genomes(
            query,
            fragment_length,
            exact_match_only,
            threshold,
        ) {
            Ok(matches) => matches,
            Err(MatchError::NoMatch) => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        results.push(QueryResult {
            query_name: query.name().to_string(),
            matches,
        });
    }

    if results.iter().all(|r| r.matches.is_empty()) {
        eprintln!("No related genomes found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn print_text_results(results: &[QueryResult]) {
    for result in results {
        println!("Related Genomes: {}", result.query_name);
        println!("{}", "=".repeat(60));
        if result.matches.is_empty() {
            println!("  (none above threshold)");
        }
        for (i, m) in result.matches.iter().enumerate() {
            println!("  #{} {} {:.2}%", i + 1, m.genome_name, m.percent_match);
        }
        println!();
    }
}

fn print_json_results(results: &[QueryResult]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "query": r.query_name,
                "matches": r.matches,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[QueryResult]) {
    println!("query\tgenome\tpercent_match");
    for result in results {
        for m in &result.matches {
            println!(
                "{}\t{}\t{:.4}",
                result.query_name, m.genome_name, m.percent_match
            );
        }
    }
}
