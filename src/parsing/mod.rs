//! Genome ingestion.
//!
//! Genomes are read from FASTA files (optionally gzip or bgzip compressed)
//! or standard input. Each record becomes one [`Genome`](crate::core::Genome)
//! named after its full header line (name and description).
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_matcher::parsing::fasta::parse_fasta_file;
//! use std::path::Path;
//!
//! let genomes = parse_fasta_file(Path::new("genomes.fa.gz")).unwrap();
//! for genome in &genomes {
//!     println!("{}\t{}", genome.name(), genome.len());
//! }
//! ```

pub mod fasta;

pub use fasta::ParseError;
