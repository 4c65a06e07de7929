//! # genome-matcher
//!
//! A library for locating DNA fragments across a set of genomes and for
//! estimating how related whole genomes are.
//!
//! Every window of `min_search_length` bases of every added genome is stored
//! in a prefix tree. Fragment queries seed on their first window, tolerating
//! at most one substituted base if asked, then extend each hit as far as the
//! fragment and the genome agree. Relatedness queries cut a query genome
//! into fixed-length chunks and report, per indexed genome, the percentage
//! of chunks it matches.
//!
//! ## Features
//!
//! - **Exact and approximate search**: Hamming distance at most one on the seed
//! - **Match extension**: Longest agreeing window, one mismatch allowed in approximate mode
//! - **Per-genome best match**: At most one result per genome per query
//! - **Relatedness ranking**: Percentage of matching chunks, best first
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{FragmentMatcher, Genome};
//!
//! let mut matcher = FragmentMatcher::new(4).unwrap();
//! matcher.add_genome(&Genome::new("A", "ACGTACGTTGCA")).unwrap();
//! matcher.add_genome(&Genome::new("B", "TTTTACGTCCCC")).unwrap();
//!
//! for m in matcher.find_genomes_with_this_dna(b"ACGT", 4, true).unwrap() {
//!     println!("{}: {} bases at {}", m.genome_name, m.length, m.position);
//! }
//!
//! let query = Genome::new("query", "ACGTACGTTGCA");
//! for g in matcher.find_related_genomes(&query, 4, true, 0.0).unwrap() {
//!     println!("{}: {:.1}%", g.genome_name, g.percent_match);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Prefix index and genome storage
//! - [`core`]: Genomes and result records
//! - [`matching`]: Fragment search, extension and relatedness
//! - [`parsing`]: FASTA ingestion
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::trie::PrefixIndex;
pub use core::genome::Genome;
pub use core::types::*;
pub use matching::engine::FragmentMatcher;
pub use matching::{MatchError, MatcherConfig};
