//! Parser for FASTA files using noodles.
//!
//! Reads every record into a [`Genome`]. Bases are case-insensitive and
//! stored upper case; anything other than `A`, `C`, `G`, `T` or `N` is
//! rejected.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::core::Genome;
use crate::utils::validation::{check_genome_limit, normalize_base, MAX_GENOMES};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid base '{base}' at position {position} of '{name}'")]
    InvalidBase {
        name: String,
        base: char,
        position: usize,
    },

    #[error("Too many genomes: {0} exceeds maximum allowed ({max})", max = MAX_GENOMES)]
    TooManyGenomes(usize),
}

const COMPRESSED_SUFFIXES: [&str; 2] = ["gz", "bgz"];

/// Lowercased file extension, if any
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
}

/// True for `.fa`, `.fasta` or `.fna`, optionally followed by `.gz`/`.bgz`
pub fn is_fasta_file(path: &Path) -> bool {
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };
    matches!(
        inner.and_then(extension).as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

fn is_gzipped(path: &Path) -> bool {
    extension(path).is_some_and(|ext| COMPRESSED_SUFFIXES.contains(&ext.as_str()))
}

/// Full header line after `>`: the record name, then its description if any
fn header_name(record: &fasta::Record) -> String {
    let definition = record.definition();
    let mut name = definition.name().to_vec();
    if let Some(description) = definition.description() {
        name.push(b' ');
        name.extend_from_slice(description);
    }
    String::from_utf8_lossy(&name).into_owned()
}

/// Parse every record of a FASTA file into a genome.
///
/// Gzip and bgzip input is detected from the file extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record is malformed, `ParseError::InvalidBase` for a symbol outside
/// the alphabet, `ParseError::InvalidFormat` for a record without name or
/// bases or a file without records, or `ParseError::TooManyGenomes` if the
/// limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Genome>, ParseError> {
    let file = std::fs::File::open(path)?;
    let genomes = if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    debug!(
        path = %path.display(),
        genomes = genomes.len(),
        "Parsed FASTA file"
    );
    Ok(genomes)
}

/// Parse FASTA records from standard input.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_stdin() -> Result<Vec<Genome>, ParseError> {
    parse_fasta_reader(std::io::stdin().lock())
}

/// Parse FASTA records from any buffered reader.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut genomes = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check genome limit for DOS protection
        if check_genome_limit(genomes.len()).is_some() {
            return Err(ParseError::TooManyGenomes(genomes.len()));
        }

        let name = header_name(&record);
        if name.is_empty() {
            return Err(ParseError::InvalidFormat(
                "Record without a name".to_string(),
            ));
        }

        let sequence = record.sequence().as_ref();
        if sequence.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Record '{name}' has no bases"
            )));
        }

        let bases = normalize_bases(&name, sequence)?;
        genomes.push(Genome::new(name, bases));
    }

    if genomes.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(genomes)
}

fn normalize_bases(name: &str, sequence: &[u8]) -> Result<Vec<u8>, ParseError> {
    sequence
        .iter()
        .enumerate()
        .map(|(position, &base)| {
            normalize_base(base).ok_or_else(|| ParseError::InvalidBase {
                name: name.to_string(),
                base: char::from(base),
                position,
            })
        })
        .collect()
}
