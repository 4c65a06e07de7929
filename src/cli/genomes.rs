//! Genomes command - list the records that would be indexed.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_genomes, OutputFormat};
use crate::core::Genome;

/// Arguments for the genomes command
#[derive(Args)]
pub struct GenomesArgs {
    /// FASTA files to list (use '-' for stdin)
    #[arg(short, long = "genomes", required = true, num_args = 1..)]
    pub genomes: Vec<PathBuf>,
}

/// Execute the genomes command
///
/// # Errors
///
/// Returns an error if an input cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenomesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut genomes = Vec::new();
    for path in &args.genomes {
        genomes.extend(read_genomes(path)?);
    }

    match format {
        OutputFormat::Text => print_text(&genomes),
        OutputFormat::Json => print_json(&genomes)?,
        OutputFormat::Tsv => print_tsv(&genomes),
    }
    Ok(())
}

fn print_text(genomes: &[Genome]) {
    println!("{} genomes", genomes.len());
    println!("{}", "=".repeat(60));
    for (index, genome) in genomes.iter().enumerate() {
        println!("  [{index}] {} ({} bp)", genome.name(), genome.len());
    }
}

fn print_json(genomes: &[Genome]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = genomes
        .iter()
        .enumerate()
        .map(|(index, g)| {
            serde_json::json!({
                "index": index,
                "name": g.name(),
                "length": g.len(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(genomes: &[Genome]) {
    println!("index\tname\tlength");
    for (index, genome) in genomes.iter().enumerate() {
        println!("{index}\t{}\t{}", genome.name(), genome.len());
    }
}
